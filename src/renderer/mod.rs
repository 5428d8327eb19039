//! Rendering module
//!
//! The scene is drawn through the small `Surface` port so the same code
//! paints a browser canvas or a headless recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::sim::{GameState, RunState};

/// Score text size (px)
pub const SCORE_FONT_PX: u32 = 36;
/// Timer text size (px)
pub const TIMER_FONT_PX: u32 = 24;
/// Winner banner size (px)
pub const BANNER_FONT_PX: u32 = 36;
/// Baseline of the HUD row
pub const HUD_Y: f32 = 30.0;

/// Named fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Yellow,
}

impl Color {
    /// CSS color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }
}

/// A 2D drawing target
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);
    /// Draw text with its baseline-left at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color, size_px: u32);
}

/// Format remaining seconds as `M:SS`
pub fn format_timer(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Draw the current frame. Reads `state` only.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let t = &state.tuning;

    surface.clear();

    // Paddles
    surface.fill_rect(0.0, state.left.position, t.paddle_width, t.paddle_height, Color::White);
    surface.fill_rect(
        t.width - t.paddle_width,
        state.right.position,
        t.paddle_width,
        t.paddle_height,
        Color::White,
    );

    // Ball
    surface.fill_circle(state.ball.pos.x, state.ball.pos.y, t.ball_size / 2.0, Color::White);

    // HUD
    surface.fill_text(
        &state.score.left.to_string(),
        t.width / 4.0,
        HUD_Y,
        Color::White,
        SCORE_FONT_PX,
    );
    surface.fill_text(
        &state.score.right.to_string(),
        3.0 * t.width / 4.0,
        HUD_Y,
        Color::White,
        SCORE_FONT_PX,
    );
    surface.fill_text(
        &format_timer(state.timer),
        t.width / 2.0 - 30.0,
        HUD_Y,
        Color::White,
        TIMER_FONT_PX,
    );

    if state.run_state == RunState::Ended {
        if let Some(winner) = state.winner {
            surface.fill_text(
                &format!("{} Wins!", winner.as_str()),
                t.width / 2.0 - 100.0,
                t.height / 2.0,
                Color::Yellow,
                BANNER_FONT_PX,
            );
        }
    }
}
