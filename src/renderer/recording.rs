//! Headless surface that records draw calls
//!
//! Used by the native runner and by tests to inspect what a frame draws.

use super::{Color, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        size_px: u32,
    },
}

/// Keeps the draw calls since the last `clear()`
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Frames started (number of `clear()` calls)
    pub frames: u64,
}

impl RecordingSurface {
    /// Text of every recorded `fill_text`, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { cx, cy, r, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color, size_px: u32) {
        log::trace!("text {:?} at ({}, {})", text, x, y);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
            size_px,
        });
    }
}
