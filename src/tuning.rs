//! Match tuning
//!
//! The rules are fixed; `Tuning` gathers the constants in one value so the
//! setup can be validated and logged before a match starts.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Drawing surface width (pixels)
    pub width: f32,
    /// Drawing surface height (pixels)
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Ball diameter (pixels)
    pub ball_size: f32,
    /// Paddle speed magnitude (pixels/frame)
    pub paddle_speed: f32,
    /// Ball speed magnitude per axis (pixels/frame)
    pub ball_speed: f32,
    /// Match length (seconds)
    pub match_seconds: u32,
    /// Score that ends the match immediately
    pub winning_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            match_seconds: MATCH_SECONDS,
            winning_score: WINNING_SCORE,
        }
    }
}

impl Tuning {
    /// Check the setup preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), SetupError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(SetupError::NonPositive { name, value });
            }
        }

        if self.height < self.paddle_height {
            return Err(SetupError::ArenaTooShort {
                height: self.height,
                paddle_height: self.paddle_height,
            });
        }

        if self.width <= 2.0 * self.paddle_width + self.ball_size {
            return Err(SetupError::ArenaTooNarrow {
                width: self.width,
                paddle_width: self.paddle_width,
                ball_size: self.ball_size,
            });
        }

        if self.winning_score == 0 {
            return Err(SetupError::ZeroWinningScore);
        }

        Ok(())
    }

    /// Highest valid paddle offset
    #[inline]
    pub fn paddle_max(&self) -> f32 {
        self.height - self.paddle_height
    }
}
