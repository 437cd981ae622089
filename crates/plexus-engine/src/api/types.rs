use serde::Serialize;

use crate::core::constants::{LINK_DIVISOR, LINK_OFFSET, POINTER_RADIUS_RATIO};

/// Canvas dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build a size from measured values, mapping NaN, infinities and
    /// negatives to zero.
    pub fn sanitized(width: f32, height: f32) -> Self {
        let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(fix(width), fix(height))
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Distances derived from the canvas size, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetrics {
    /// Maximum separation at which two particles are linked.
    pub link_distance: f32,
    /// Reach of the pointer's repulsion.
    pub pointer_radius: f32,
}

impl FieldMetrics {
    pub fn for_size(size: Size) -> Self {
        let link_distance = size.min_side() / LINK_DIVISOR + LINK_OFFSET;
        Self {
            link_distance,
            pointer_radius: link_distance * POINTER_RADIUS_RATIO,
        }
    }
}

/// What the last frame did. Serialized for the page's debug hooks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    /// Frames rendered since mount.
    pub frame: u64,
    pub particles: usize,
    pub links: usize,
    /// Particles the pointer pushed this frame.
    pub pushed: usize,
    pub pointer_active: bool,
    pub size: Size,
}

impl FrameStats {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
