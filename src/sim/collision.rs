//! Collision tests for the ball against walls and paddle bands
//!
//! All checks are against the ball's centre point with no positional
//! correction: a hit only inverts one velocity component. A ball that stays
//! inside a band for several frames is inverted on each of them.

use glam::Vec2;

use super::state::{Paddle, Side};
use crate::tuning::Tuning;

/// Ball touched or crossed the top or bottom wall
#[inline]
pub fn hits_horizontal_wall(ball_pos: Vec2, height: f32) -> bool {
    ball_pos.y <= 0.0 || ball_pos.y >= height
}

/// Ball is inside the horizontal collision zone in front of a paddle
#[inline]
pub fn in_paddle_zone(ball_x: f32, side: Side, tuning: &Tuning) -> bool {
    match side {
        Side::Left => ball_x <= tuning.paddle_width,
        Side::Right => ball_x >= tuning.width - tuning.paddle_width - tuning.ball_size,
    }
}

/// Ball is inside the paddle band: the horizontal zone and the paddle's
/// vertical extent, both inclusive
pub fn ball_paddle_collision(ball_pos: Vec2, paddle: &Paddle, side: Side, tuning: &Tuning) -> bool {
    let (top, bottom) = paddle.band(tuning.paddle_height);
    in_paddle_zone(ball_pos.x, side, tuning) && ball_pos.y >= top && ball_pos.y <= bottom
}

/// Side that scores when the ball leaves the arena, if any
pub fn goal_scorer(ball_x: f32, width: f32) -> Option<Side> {
    if ball_x <= 0.0 {
        Some(Side::Right)
    } else if ball_x >= width {
        Some(Side::Left)
    } else {
        None
    }
}
