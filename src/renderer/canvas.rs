//! Canvas 2D backend

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, Tint};
use crate::sim::Playfield;

/// Draws onto an HTML canvas whose backing store is fixed to the playfield
/// size; CSS scales it to the page.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    glow: bool,
}

impl CanvasSurface {
    pub fn new(
        canvas: &HtmlCanvasElement,
        playfield: &Playfield,
        glow: bool,
    ) -> Result<Self, JsValue> {
        canvas.set_width(playfield.width as u32);
        canvas.set_height(playfield.height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { ctx, glow })
    }

    pub fn set_glow(&mut self, glow: bool) {
        self.glow = glow;
    }

    fn apply_glow(&self, tint: Tint) {
        if self.glow && tint.glow() > 0.0 {
            self.ctx.set_shadow_blur(tint.glow() as f64);
            self.ctx.set_shadow_color(tint.css());
        }
    }

    fn reset_glow(&self) {
        self.ctx.set_shadow_blur(0.0);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2, tint: Tint) {
        self.ctx.set_fill_style_str(tint.css());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, tint: Tint) {
        self.apply_glow(tint);
        self.ctx.set_fill_style_str(tint.css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        self.reset_glow();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, tint: Tint) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(tint.css());
        self.apply_glow(tint);
        self.ctx.fill();
        self.ctx.close_path();
        self.reset_glow();
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: [f32; 2], tint: Tint) {
        let pattern = js_sys::Array::of2(
            &JsValue::from_f64(dash[0] as f64),
            &JsValue::from_f64(dash[1] as f64),
        );
        self.ctx.set_stroke_style_str(tint.css());
        self.ctx.set_line_width(width as f64);
        let _ = self.ctx.set_line_dash(&pattern);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        let _ = self.ctx.set_line_dash(&js_sys::Array::new());
    }
}
