//! Drawing surface contract.
//!
//! The engine emits a handful of immediate-mode 2D primitives per frame. The
//! browser bridge implements `Surface` on a `CanvasRenderingContext2d`;
//! `DrawRecorder` implements it in memory for tests and headless hosts.

use glam::Vec2;

/// sRGB colour with 8-bit channels and a float alpha, as in CSS `rgba()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha, clamped to [0, 1].
    pub fn with_alpha(self, a: f32) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(14, 165, 233, 0.82)`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One colour stop of a radial gradient; `offset` is in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Immediate-mode 2D target the field draws into each frame.
/// Coordinates are CSS pixels; device pixel ratio is the implementor's job.
pub trait Surface {
    /// Erase the whole `width` × `height` area to transparent.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill the whole area with a solid colour.
    fn fill_rect(&mut self, width: f32, height: f32, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Fill a disc of `radius` around `center` with a radial gradient
    /// running from the centre (offset 0) to the rim (offset 1).
    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
}
