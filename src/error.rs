//! Setup errors
//!
//! The simulation itself never fails; these are precondition violations
//! caught when a match is created.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("arena height {height} is smaller than paddle height {paddle_height}")]
    ArenaTooShort { height: f32, paddle_height: f32 },

    #[error("arena width {width} cannot fit two paddles of width {paddle_width} and a ball of size {ball_size}")]
    ArenaTooNarrow {
        width: f32,
        paddle_width: f32,
        ball_size: f32,
    },

    #[error("winning score must be at least 1")]
    ZeroWinningScore,
}
