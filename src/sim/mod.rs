//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per displayed frame, speeds in pixels/frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_paddle_collision, goal_scorer, hits_horizontal_wall};
pub use state::{Ball, GameState, Paddle, RunState, Score, Side, Winner};
pub use tick::{reset_ball, tick_timer, update};
