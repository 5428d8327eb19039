//! Composition root helpers
//!
//! `Match` bundles the game state with its surface and exposes the two
//! periodic callbacks a host schedules: one per display frame and one per
//! second. Each returns `ControlFlow::Break` once the host should stop
//! re-arming it.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::input::{handle_key_down, handle_key_up};
use crate::renderer::{Surface, render};
use crate::sim::{GameState, RunState, Winner, tick_timer, update};
use crate::tuning::Tuning;

/// Final result of a match, logged as JSON when it ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Winner,
    pub left_score: u32,
    pub right_score: u32,
    pub seconds_remaining: u32,
    pub frames: u64,
    pub seed: u64,
}

impl MatchSummary {
    /// `None` while the match is still running
    pub fn from_state(state: &GameState) -> Option<Self> {
        Some(Self {
            winner: state.winner?,
            left_score: state.score.left,
            right_score: state.score.right,
            seconds_remaining: state.timer,
            frames: state.frames,
            seed: state.seed,
        })
    }
}

/// A running match and the surface it draws to
pub struct Match<S: Surface> {
    pub state: GameState,
    pub surface: S,
}

impl<S: Surface> Match<S> {
    pub fn new(tuning: Tuning, seed: u64, surface: S) -> Result<Self, SetupError> {
        let state = GameState::new(tuning, seed)?;
        log::info!(
            "Match started: {}x{}, {}s, first to {} (seed {})",
            tuning.width,
            tuning.height,
            tuning.match_seconds,
            tuning.winning_score,
            seed
        );
        Ok(Self { state, surface })
    }

    pub fn key_down(&mut self, key: &str) {
        handle_key_down(&mut self.state, key);
    }

    pub fn key_up(&mut self, key: &str) {
        handle_key_up(&mut self.state, key);
    }

    /// Frame callback: step and draw. Breaks with the summary on the frame
    /// the match is seen to be over; that frame still gets drawn.
    pub fn on_frame(&mut self) -> ControlFlow<MatchSummary> {
        update(&mut self.state);
        render(&self.state, &mut self.surface);

        match MatchSummary::from_state(&self.state) {
            Some(summary) => {
                match serde_json::to_string(&summary) {
                    Ok(json) => log::info!("Match summary: {}", json),
                    Err(e) => log::warn!("Could not serialize match summary: {}", e),
                }
                ControlFlow::Break(summary)
            }
            None => ControlFlow::Continue(()),
        }
    }

    /// One-second callback. Breaks once the match has ended so the interval
    /// can cancel itself.
    pub fn on_second(&mut self) -> ControlFlow<()> {
        if self.state.run_state == RunState::Ended {
            return ControlFlow::Break(());
        }
        tick_timer(&mut self.state);
        ControlFlow::Continue(())
    }
}

/// Headless scheduler: a fixed number of frames per simulated second
#[derive(Debug, Clone, Copy)]
pub struct SimulatedClock {
    pub frames_per_second: u32,
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self {
            frames_per_second: 60,
        }
    }
}

impl SimulatedClock {
    /// Drive `game` until the frame loop stops. `on_frame_input` runs before
    /// each frame with the frame index so callers can script key events.
    pub fn run<S, F>(&self, game: &mut Match<S>, mut on_frame_input: F) -> MatchSummary
    where
        S: Surface,
        F: FnMut(u64, &mut Match<S>),
    {
        let fps = u64::from(self.frames_per_second.max(1));
        let mut timer_armed = true;
        let mut frame = 0u64;

        loop {
            on_frame_input(frame, game);

            if let ControlFlow::Break(summary) = game.on_frame() {
                return summary;
            }
            frame += 1;

            if timer_armed && frame % fps == 0 {
                if let ControlFlow::Break(()) = game.on_second() {
                    timer_armed = false;
                }
            }
        }
    }
}
