//! Rendering module
//!
//! Drawing is a pure read of `GameState` onto a `Surface`. The surface only
//! needs four 2D primitives; the browser backend is a canvas 2D context, the
//! headless backend records the primitives for inspection.

pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{DIVIDER_DASH, DIVIDER_WIDTH, Tint, draw_scene};

use glam::Vec2;

/// A display surface in playfield coordinates.
///
/// Implementations own the mapping to real pixels and the cosmetic styling
/// (colors, glow) behind each `Tint`.
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, size: Vec2, tint: Tint);
    /// Filled axis-aligned rectangle with top-left corner `pos`
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, tint: Tint);
    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, tint: Tint);
    /// Stroked line with a [dash, gap] pattern
    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: [f32; 2], tint: Tint);
}
