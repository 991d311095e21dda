use std::f64::consts::TAU;

use ember_trail::{Rgba, Surface};
use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

/// `Surface` backed by a browser 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_glow(&mut self, blur: f32, color: Rgba) {
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(&color.css());
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32, color: Rgba) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::debug!("arc rejected: {:?}", err);
            return;
        }
        self.ctx.fill();
    }

    fn reset(&mut self) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_shadow_blur(0.0);
    }
}
