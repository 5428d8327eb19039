//! Keyboard input handling
//!
//! Maps browser key identifiers onto paddle speeds. The left paddle moves on
//! "z"/"s" but stops on "w"/"s" key-up; the mismatch is kept as-is.

use crate::sim::{GameState, Side};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Z,
    S,
    W,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a `KeyboardEvent.key` identifier (case-sensitive)
    pub fn from_identifier(key: &str) -> Option<Self> {
        match key {
            "z" => Some(Key::Z),
            "s" => Some(Key::S),
            "w" => Some(Key::W),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }

    /// Paddle and direction a key-down sets (-1 up, +1 down)
    fn press_target(self) -> Option<(Side, f32)> {
        match self {
            Key::Z => Some((Side::Left, -1.0)),
            Key::S => Some((Side::Left, 1.0)),
            Key::ArrowUp => Some((Side::Right, -1.0)),
            Key::ArrowDown => Some((Side::Right, 1.0)),
            Key::W => None,
        }
    }

    /// Paddle a key-up stops
    fn release_target(self) -> Option<Side> {
        match self {
            Key::W | Key::S => Some(Side::Left),
            Key::ArrowUp | Key::ArrowDown => Some(Side::Right),
            Key::Z => None,
        }
    }
}

/// Handle key down event
pub fn handle_key_down(state: &mut GameState, key: &str) {
    if !state.is_running() {
        return;
    }
    let Some((side, direction)) = Key::from_identifier(key).and_then(Key::press_target) else {
        return;
    };
    let speed = direction * state.tuning.paddle_speed;
    state.paddle_mut(side).speed = speed;
}

/// Handle key up event
pub fn handle_key_up(state: &mut GameState, key: &str) {
    if !state.is_running() {
        return;
    }
    if let Some(side) = Key::from_identifier(key).and_then(Key::release_target) {
        state.paddle_mut(side).speed = 0.0;
    }
}
