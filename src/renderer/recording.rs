//! Headless surface that records primitives instead of drawing them

use glam::Vec2;

use super::{Surface, Tint};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
        tint: Tint,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        tint: Tint,
    },
    Circle {
        center: Vec2,
        radius: f32,
        tint: Tint,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: [f32; 2],
        tint: Tint,
    },
}

/// Keeps the primitives of the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    /// Primitives drawn since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen, i.e. frames drawn
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2, tint: Tint) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { size, tint });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, tint: Tint) {
        self.commands.push(DrawCommand::Rect { pos, size, tint });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, tint: Tint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            tint,
        });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: [f32; 2], tint: Tint) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            width,
            dash,
            tint,
        });
    }
}
