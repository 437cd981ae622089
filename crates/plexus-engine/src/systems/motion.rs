use crate::api::types::{FieldMetrics, Size};
use crate::components::particle::Particle;
use crate::core::constants::{FRICTION_ACTIVE, FRICTION_IDLE, MIN_FLOAT_SPEED, POINTER_FORCE};
use crate::core::rng::Rng;
use crate::input::pointer::PointerState;

/// Advance every particle by one frame: pointer repulsion, friction, the
/// minimum-speed floor, then integration with reflective bounds.
///
/// Returns how many particles were pushed by the pointer.
pub fn step_particles<'a>(
    particles: impl Iterator<Item = &'a mut Particle>,
    pointer: &PointerState,
    metrics: &FieldMetrics,
    bounds: Size,
    rng: &mut Rng,
) -> usize {
    let pointer_pos = pointer.active_pos();
    let friction = if pointer.active { FRICTION_ACTIVE } else { FRICTION_IDLE };
    let mut pushed = 0;

    for p in particles {
        if let Some(at) = pointer_pos {
            if p.repel_from(at, metrics.pointer_radius, POINTER_FORCE) {
                pushed += 1;
            }
        }
        p.apply_friction(friction);
        p.enforce_min_speed(MIN_FLOAT_SPEED, rng);
        p.integrate(bounds);
    }

    pushed
}
