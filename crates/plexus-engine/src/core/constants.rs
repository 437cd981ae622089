//! Tuning constants for the particle field.
//!
//! All distances are in CSS pixels; speeds are pixels per frame.

use crate::renderer::traits::{GradientStop, Rgba};

/// Lower bound on the seeded population.
pub const MIN_PARTICLES: usize = 90;
/// Upper bound on the population, seeded or after bursts.
pub const MAX_PARTICLES: usize = 180;
/// Container area (px²) per particle when seeding.
pub const DENSITY_DIVISOR: f32 = 9000.0;

/// Base drift speed for seeded particles.
pub const BASE_SPEED: f32 = 0.34;
/// Seed velocity per axis is `centered() * BASE_SPEED * SEED_SPEED_SPREAD`.
pub const SEED_SPEED_SPREAD: f32 = 2.2;
/// Speed below which a particle is nudged back into motion.
pub const MIN_FLOAT_SPEED: f32 = BASE_SPEED * 0.7;

/// Particles injected per pointer-down.
pub const CLICK_BURST_COUNT: usize = 10;
/// Burst velocity per axis is `centered() * CLICK_SPEED * 2`.
pub const CLICK_SPEED: f32 = 1.1;

/// Velocity damping per frame with no pointer over the field.
pub const FRICTION_IDLE: f32 = 0.986;
/// Velocity damping per frame while the pointer is over the field.
pub const FRICTION_ACTIVE: f32 = 0.965;

/// `link_distance = min(width, height) / LINK_DIVISOR + LINK_OFFSET`.
pub const LINK_DIVISOR: f32 = 4.0;
pub const LINK_OFFSET: f32 = 70.0;
/// `pointer_radius = link_distance * POINTER_RADIUS_RATIO`.
pub const POINTER_RADIUS_RATIO: f32 = 0.68;
/// Peak impulse applied to a particle sitting right next to the pointer.
pub const POINTER_FORCE: f32 = 0.38;
/// Squared distance under which the pointer force is skipped (avoids dividing by ~0).
pub const MIN_DISTANCE_SQ: f32 = 1.0;

/// Drawn radius of a particle. Not used for collision.
pub const PARTICLE_RADIUS: f32 = 2.4;
pub const PARTICLE_COLOR: Rgba = Rgba::new(14, 165, 233, 0.82);

pub const LINK_COLOR: Rgba = Rgba::new(14, 165, 233, 1.0);
pub const LINK_WIDTH: f32 = 1.0;
/// Link alpha is `min((1 - d / link_distance) * LINK_ALPHA_SCALE, LINK_ALPHA_MAX)`.
pub const LINK_ALPHA_SCALE: f32 = 0.8;
pub const LINK_ALPHA_MAX: f32 = 0.7;

/// Radial glow painted under an active pointer, fading out at `pointer_radius`.
pub const GLOW_STOPS: [GradientStop; 3] = [
    GradientStop::new(0.0, Rgba::new(8, 145, 178, 0.28)),
    GradientStop::new(0.6, Rgba::new(14, 165, 233, 0.12)),
    GradientStop::new(1.0, Rgba::new(14, 165, 233, 0.0)),
];

/// Backdrop of the `framed` variant.
pub const FRAMED_BACKDROP: Rgba = Rgba::new(255, 255, 255, 1.0);
