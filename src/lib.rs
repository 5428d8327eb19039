//! Duel Pong - classic two-player Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, scoring, timer, match end)
//! - `input`: Keyboard mapping onto paddle speeds
//! - `renderer`: Scene drawing through a small surface port
//! - `driver`: Frame/second callbacks for the host scheduler
//! - `tuning`: Match constants and setup validation

pub mod driver;
pub mod error;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{Match, MatchSummary, SimulatedClock};
pub use error::SetupError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Pixels per frame while a key is held
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball diameter
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-axis ball speed (pixels per frame)
    pub const BALL_SPEED: f32 = 4.0;

    /// Match length (3 minutes)
    pub const MATCH_SECONDS: u32 = 180;
    pub const WINNING_SCORE: u32 = 21;

    /// Timer interval
    pub const TIMER_INTERVAL_MS: i32 = 1000;
}
