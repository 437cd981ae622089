//! Point-mass particle and its per-frame physics steps.

use glam::Vec2;

use crate::api::types::Size;
use crate::core::constants::MIN_DISTANCE_SQ;
use crate::core::rng::Rng;

/// A drifting point mass. Speeds are in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Push the particle away from `pointer` if it lies inside `radius`.
    ///
    /// The impulse scales with `(1 - d / radius) * strength`. Returns true
    /// when an impulse was applied.
    pub fn repel_from(&mut self, pointer: Vec2, radius: f32, strength: f32) -> bool {
        let delta = self.pos - pointer;
        let dist_sq = delta.length_squared();
        if !(dist_sq < radius * radius && dist_sq > MIN_DISTANCE_SQ) {
            return false;
        }
        let dist = dist_sq.sqrt();
        let falloff = 1.0 - dist / radius;
        self.vel += delta / dist * (falloff * strength);
        true
    }

    pub fn apply_friction(&mut self, friction: f32) {
        self.vel *= friction;
    }

    /// Keep the particle drifting: if its speed fell under `min_speed`, top
    /// it back up along its heading (or a random one when fully stopped).
    /// A non-finite velocity is replaced outright.
    pub fn enforce_min_speed(&mut self, min_speed: f32, rng: &mut Rng) {
        let speed = self.vel.length();
        if !speed.is_finite() {
            self.vel = Vec2::from_angle(rng.angle()) * min_speed;
            return;
        }
        if speed >= min_speed {
            return;
        }
        let heading = if speed > 0.0 {
            self.vel.y.atan2(self.vel.x)
        } else {
            rng.angle()
        };
        self.vel += Vec2::from_angle(heading) * (min_speed - speed);
    }

    /// Move by one frame of velocity and bounce off the bounds.
    ///
    /// Touching or crossing an edge flips that velocity component and clamps
    /// the centre onto the edge.
    pub fn integrate(&mut self, bounds: Size) {
        self.pos += self.vel;

        if self.pos.x <= 0.0 || self.pos.x >= bounds.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= 0.0 || self.pos.y >= bounds.height {
            self.vel.y = -self.vel.y;
        }
        self.pos = clamp_to(self.pos, bounds);
    }
}

/// Clamp a point into `[0, width] × [0, height]`; NaN lands on the centre.
pub fn clamp_to(p: Vec2, bounds: Size) -> Vec2 {
    let axis = |v: f32, max: f32| {
        if v.is_nan() {
            max * 0.5
        } else {
            v.clamp(0.0, max)
        }
    };
    Vec2::new(axis(p.x, bounds.width), axis(p.y, bounds.height))
}
