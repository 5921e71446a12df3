//! Scene layout: what gets drawn, where, and in which order

use glam::Vec2;

use super::Surface;
use crate::sim::{Ball, GameState, Paddle, Side};

/// Stroke width of the center divider
pub const DIVIDER_WIDTH: f32 = 4.0;
/// Center divider dash pattern: 20 on, 20 off
pub const DIVIDER_DASH: [f32; 2] = [20.0, 20.0];

/// Palette slot of a primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Background,
    Divider,
    Paddle(Side),
    Ball,
}

impl Tint {
    /// CSS color string for canvas backends
    pub fn css(&self) -> &'static str {
        match self {
            Tint::Background => "#050510",
            Tint::Divider => "rgba(255, 255, 255, 0.1)",
            Tint::Paddle(side) => side.accent_color(),
            Tint::Ball => "#ffffff",
        }
    }

    /// Neon glow radius (shadow blur); 0 means no glow
    pub fn glow(&self) -> f32 {
        match self {
            Tint::Paddle(_) => 20.0,
            Tint::Ball => 15.0,
            _ => 0.0,
        }
    }
}

/// Draw one frame: clear, center divider, player, AI, ball.
pub fn draw_scene<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let field = state.playfield;
    surface.clear(Vec2::new(field.width, field.height), Tint::Background);

    let mid = field.width / 2.0;
    surface.dashed_line(
        Vec2::new(mid, 0.0),
        Vec2::new(mid, field.height),
        DIVIDER_WIDTH,
        DIVIDER_DASH,
        Tint::Divider,
    );

    draw_paddle(&state.player, surface);
    draw_paddle(&state.ai, surface);
    draw_ball(&state.ball, surface);
}

fn draw_paddle<S: Surface + ?Sized>(paddle: &Paddle, surface: &mut S) {
    surface.fill_rect(paddle.pos, paddle.size, Tint::Paddle(paddle.side));
}

fn draw_ball<S: Surface + ?Sized>(ball: &Ball, surface: &mut S) {
    surface.fill_circle(ball.pos, ball.radius, Tint::Ball);
}
