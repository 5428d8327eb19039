//! Per-frame simulation step and the one-second timer tick
//!
//! Speeds are pixels per frame; the step is not normalised to wall time.

use rand::Rng;

use super::collision::{ball_paddle_collision, goal_scorer, hits_horizontal_wall};
use super::state::{GameState, RunState, Side, Winner};

/// Advance the match by one frame. No-op once the match has ended.
pub fn update(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.frames += 1;
    let tuning = state.tuning;

    // Move paddles
    let max_position = tuning.paddle_max();
    state.left.advance(max_position);
    state.right.advance(max_position);

    // Move ball
    state.ball.pos += state.ball.vel;

    // Top and bottom walls
    if hits_horizontal_wall(state.ball.pos, tuning.height) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddles
    if ball_paddle_collision(state.ball.pos, &state.left, Side::Left, &tuning) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if ball_paddle_collision(state.ball.pos, &state.right, Side::Right, &tuning) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Scoring
    if let Some(side) = goal_scorer(state.ball.pos.x, tuning.width) {
        state.score.increment(side);
        log::debug!(
            "{:?} scores at frame {} ({}-{})",
            side,
            state.frames,
            state.score.left,
            state.score.right
        );
        reset_ball(state);
    }

    check_match_over(state);
}

/// Count down one second. No-op once the match has ended.
pub fn tick_timer(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.timer = state.timer.saturating_sub(1);
}

/// Serve the ball again from the centre with a coin-flip vertical direction
pub fn reset_ball(state: &mut GameState) {
    let serve_down = state.rng.random_bool(0.5);
    state.ball.reset(&state.tuning, serve_down);
}

/// End the match if a side reached the winning score or time ran out
fn check_match_over(state: &mut GameState) {
    let winning_score = state.tuning.winning_score;
    let reached = state.score.left == winning_score || state.score.right == winning_score;
    if !reached && state.timer > 0 {
        return;
    }

    let winner = Winner::resolve(&state.score, winning_score);
    state.run_state = RunState::Ended;
    state.winner = Some(winner);
    log::info!(
        "Match over after {} frames: {} wins ({}-{}, {}s left)",
        state.frames,
        winner.as_str(),
        state.score.left,
        state.score.right,
        state.timer
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Paddle, Score};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(Tuning::default(), 12345).unwrap()
    }

    #[test]
    fn test_update_moves_ball_and_paddles() {
        let mut state = new_state();
        state.left.speed = -6.0;
        state.right.speed = 6.0;

        update(&mut state);

        assert_eq!(state.left.position, 144.0);
        assert_eq!(state.right.position, 156.0);
        assert_eq!(state.ball.pos, Vec2::new(404.0, 204.0));
        assert_eq!(state.frames, 1);
        assert_eq!(state.run_state, RunState::Running);
    }

    #[test]
    fn test_reflects_off_top_wall() {
        let mut state = new_state();
        state.ball = Ball {
            pos: Vec2::new(400.0, 2.0),
            vel: Vec2::new(4.0, -3.0),
        };

        update(&mut state);

        assert_eq!(state.ball.pos.y, -1.0);
        assert_eq!(state.ball.vel.y, 3.0);
    }

    #[test]
    fn test_reflects_off_bottom_wall_without_correction() {
        let mut state = new_state();
        state.ball = Ball {
            pos: Vec2::new(400.0, 398.0),
            vel: Vec2::new(4.0, 4.0),
        };

        update(&mut state);

        // Overlap is left in place
        assert_eq!(state.ball.pos.y, 402.0);
        assert_eq!(state.ball.vel.y, -4.0);
    }

    #[test]
    fn test_left_paddle_returns_ball() {
        let mut state = new_state();
        state.left.position = 100.0;
        state.ball = Ball {
            pos: Vec2::new(13.0, 150.0),
            vel: Vec2::new(-4.0, 4.0),
        };

        update(&mut state);

        assert_eq!(state.ball.pos.x, 9.0);
        assert_eq!(state.ball.vel.x, 4.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_right_paddle_returns_ball() {
        let mut state = new_state();
        state.right.position = 100.0;
        state.ball = Ball {
            pos: Vec2::new(777.0, 150.0),
            vel: Vec2::new(4.0, 4.0),
        };

        update(&mut state);

        assert_eq!(state.ball.vel.x, -4.0);
    }

    #[test]
    fn test_ball_dwelling_in_band_inverts_again() {
        // No depenetration: the ball is still inside the band on the next
        // frame, so it is turned around a second time.
        let mut state = new_state();
        state.left.position = 100.0;
        state.ball = Ball {
            pos: Vec2::new(9.0, 150.0),
            vel: Vec2::new(-1.0, 0.5),
        };

        update(&mut state);
        assert_eq!(state.ball.vel.x, 1.0);

        update(&mut state);
        assert_eq!(state.ball.pos.x, 9.0);
        assert_eq!(state.ball.vel.x, -1.0);
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let mut state = new_state();
        state.left.position = 0.0;
        state.ball = Ball {
            pos: Vec2::new(3.0, 300.0),
            vel: Vec2::new(-4.0, 4.0),
        };

        update(&mut state);

        assert_eq!(state.score, Score { left: 0, right: 1 });
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x, 4.0);
        assert_eq!(state.ball.vel.y.abs(), 4.0);
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let mut state = new_state();
        state.right.position = 0.0;
        state.ball = Ball {
            pos: Vec2::new(797.0, 300.0),
            vel: Vec2::new(4.0, -4.0),
        };

        update(&mut state);

        assert_eq!(state.score, Score { left: 1, right: 0 });
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x, -4.0);
        assert_eq!(state.ball.vel.y.abs(), 4.0);
    }

    #[test]
    fn test_reset_serves_both_directions() {
        let mut state = new_state();
        let mut up = false;
        let mut down = false;
        for _ in 0..64 {
            reset_ball(&mut state);
            match state.ball.vel.y {
                y if y == 4.0 => down = true,
                y if y == -4.0 => up = true,
                y => panic!("unexpected vertical speed {y}"),
            }
        }
        assert!(up && down);
    }

    #[test]
    fn test_winning_score_ends_match() {
        let mut state = new_state();
        state.score = Score { left: 20, right: 3 };
        state.right.position = 0.0;
        state.ball = Ball {
            pos: Vec2::new(797.0, 300.0),
            vel: Vec2::new(4.0, 4.0),
        };

        update(&mut state);

        assert_eq!(state.run_state, RunState::Ended);
        assert_eq!(state.winner, Some(Winner::Left));
    }

    #[test]
    fn test_both_at_winning_score_left_wins() {
        let mut state = new_state();
        state.score = Score { left: 21, right: 21 };

        update(&mut state);

        assert_eq!(state.winner, Some(Winner::Left));
    }

    #[test]
    fn test_timer_expiry_right_ahead() {
        let mut state = new_state();
        state.score = Score { left: 10, right: 15 };
        state.timer = 0;

        update(&mut state);

        assert_eq!(state.run_state, RunState::Ended);
        assert_eq!(state.winner, Some(Winner::Right));
    }

    #[test]
    fn test_timer_expiry_tie_is_draw() {
        let mut state = new_state();
        state.score = Score { left: 9, right: 9 };
        state.timer = 0;

        update(&mut state);

        assert_eq!(state.winner, Some(Winner::Nobody));
    }

    #[test]
    fn test_tick_timer_counts_down_and_saturates() {
        let mut state = new_state();
        tick_timer(&mut state);
        assert_eq!(state.timer, 179);

        state.timer = 0;
        tick_timer(&mut state);
        assert_eq!(state.timer, 0);
    }

    #[test]
    fn test_ended_is_absorbing() {
        let mut state = new_state();
        state.timer = 0;
        state.left.speed = 6.0;
        update(&mut state);
        assert_eq!(state.run_state, RunState::Ended);

        let left = state.left;
        let right = state.right;
        let ball = state.ball;
        let score = state.score;
        let frames = state.frames;
        let winner = state.winner;

        for _ in 0..10 {
            update(&mut state);
            tick_timer(&mut state);
        }

        assert_eq!(state.left, left);
        assert_eq!(state.right, right);
        assert_eq!(state.ball, ball);
        assert_eq!(state.score, score);
        assert_eq!(state.timer, 0);
        assert_eq!(state.frames, frames);
        assert_eq!(state.winner, winner);
        assert_eq!(state.run_state, RunState::Ended);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();
        state1.left.speed = 6.0;
        state2.left.speed = 6.0;

        for frame in 0..2_000 {
            update(&mut state1);
            update(&mut state2);
            if frame % 60 == 0 {
                tick_timer(&mut state1);
                tick_timer(&mut state2);
            }
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.left, state2.left);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_bounds(
            start in 0.0f32..=300.0,
            speeds in prop::collection::vec(prop::sample::select(vec![-6.0f32, 0.0, 6.0]), 1..400),
        ) {
            let mut state = new_state();
            state.left = Paddle { position: start, speed: 0.0 };
            state.right = Paddle { position: 300.0 - start, speed: 0.0 };

            for speed in speeds {
                state.left.speed = speed;
                state.right.speed = -speed;
                update(&mut state);
                prop_assert!((0.0..=300.0).contains(&state.left.position));
                prop_assert!((0.0..=300.0).contains(&state.right.position));
            }
        }
    }
}
