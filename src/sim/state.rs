//! Game state and core simulation types
//!
//! All mutable match state lives in `GameState`; nothing is process-wide.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::tuning::Tuning;

/// Whether the match is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Active gameplay
    Running,
    /// Match over (absorbing)
    Ended,
}

/// Which side a paddle or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Outcome of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Left,
    Right,
    /// Timer ran out on a tie
    Nobody,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Left => "Left Player",
            Winner::Right => "Right Player",
            Winner::Nobody => "Nobody",
        }
    }

    /// Resolve the winner from final scores.
    ///
    /// Priority: left reached the winning score, right reached it, left
    /// ahead, right ahead, otherwise a draw.
    pub fn resolve(score: &Score, winning_score: u32) -> Self {
        if score.left == winning_score {
            Winner::Left
        } else if score.right == winning_score {
            Winner::Right
        } else if score.left > score.right {
            Winner::Left
        } else if score.right > score.left {
            Winner::Right
        } else {
            Winner::Nobody
        }
    }
}

/// A vertical paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge offset (pixels)
    pub position: f32,
    /// Signed velocity (pixels/frame, positive is down)
    pub speed: f32,
}

impl Paddle {
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            position: tuning.paddle_max() / 2.0,
            speed: 0.0,
        }
    }

    /// Apply one frame of movement and keep the paddle on the surface
    pub fn advance(&mut self, max_position: f32) {
        self.position = (self.position + self.speed).clamp(0.0, max_position);
    }

    /// Vertical extent `[top, bottom]` the paddle covers
    #[inline]
    pub fn band(&self, paddle_height: f32) -> (f32, f32) {
        (self.position, self.position + paddle_height)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.width / 2.0, tuning.height / 2.0),
            vel: Vec2::splat(tuning.ball_speed),
        }
    }

    /// Move back to the centre, flip horizontal direction, and serve
    /// vertically in the given direction at `ball_speed`.
    pub fn reset(&mut self, tuning: &Tuning, serve_down: bool) {
        self.pos = Vec2::new(tuning.width / 2.0, tuning.height / 2.0);
        self.vel.x = -self.vel.x;
        self.vel.y = if serve_down {
            tuning.ball_speed
        } else {
            -tuning.ball_speed
        };
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Seed the coin-flip RNG was created from
    pub seed: u64,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Seconds remaining
    pub timer: u32,
    pub run_state: RunState,
    /// Set once the match ends
    pub winner: Option<Winner>,
    /// Frames simulated while running
    pub frames: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a match in its opening position.
    ///
    /// Fails if `tuning` violates a setup precondition.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, SetupError> {
        tuning.validate()?;

        Ok(Self {
            tuning,
            seed,
            left: Paddle::centered(&tuning),
            right: Paddle::centered(&tuning),
            ball: Ball::new(&tuning),
            score: Score::default(),
            timer: tuning.match_seconds,
            run_state: RunState::Running,
            winner: None,
            frames: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
