use std::f64::consts::TAU;

use glam::Vec2;
use plexus_engine::{GradientStop, Rgba, Size, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::MountError;

/// `Surface` drawing into a `<canvas>` through its 2D context.
///
/// The backing store is sized in device pixels and the context transform
/// scales back, so callers draw in CSS pixels.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(MountError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the canvas to `size` CSS pixels at `pixel_ratio`.
    pub fn fit(&self, size: Size, pixel_ratio: f64) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        self.canvas.set_width((size.width as f64 * ratio).round() as u32);
        self.canvas.set_height((size.height as f64 * ratio).round() as u32);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", size.width));
        let _ = style.set_property("height", &format!("{}px", size.height));

        // Resizing the backing store resets the transform, so set it afterwards.
        if let Err(err) = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0) {
            log::warn!("plexus: setTransform failed: {:?}", err);
        }
    }

    fn disc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, width: f32, height: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.disc(center, radius);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        if !(radius > 0.0) {
            return;
        }
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(err) => {
                log::warn!("plexus: createRadialGradient failed: {:?}", err);
                return;
            }
        };
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.disc(center, radius);
        self.ctx.fill();
    }
}
