//! Pairwise links between nearby particles.
//!
//! Every unordered pair is tested each frame, O(n²). With the population
//! capped at `MAX_PARTICLES` that is at most ~16k distance checks per frame;
//! larger populations would need spatial partitioning.

use glam::Vec2;

use crate::components::particle::Particle;
use crate::core::constants::{LINK_ALPHA_MAX, LINK_ALPHA_SCALE};

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to link.
pub fn link_alpha(distance: f32, link_distance: f32) -> Option<f32> {
    if !(distance < link_distance) || link_distance <= 0.0 {
        return None;
    }
    let falloff = 1.0 - distance / link_distance;
    Some((falloff * LINK_ALPHA_SCALE).min(LINK_ALPHA_MAX))
}

/// Call `draw(from, to, alpha)` for every linked pair. Returns the link count.
pub fn for_each_link(
    particles: &[Particle],
    link_distance: f32,
    mut draw: impl FnMut(Vec2, Vec2, f32),
) -> usize {
    let max_sq = link_distance * link_distance;
    let mut count = 0;

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist_sq = a.pos.distance_squared(b.pos);
            if dist_sq >= max_sq {
                continue;
            }
            if let Some(alpha) = link_alpha(dist_sq.sqrt(), link_distance) {
                draw(a.pos, b.pos, alpha);
                count += 1;
            }
        }
    }

    count
}
