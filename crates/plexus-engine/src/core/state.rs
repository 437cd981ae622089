use glam::Vec2;

use crate::api::types::{FieldMetrics, FrameStats, Size};
use crate::components::particle::{clamp_to, Particle};
use crate::core::constants::{
    BASE_SPEED, CLICK_BURST_COUNT, CLICK_SPEED, DENSITY_DIVISOR, MAX_PARTICLES, MIN_PARTICLES,
    SEED_SPEED_SPREAD,
};
use crate::core::ring::BoundedRing;
use crate::core::rng::Rng;
use crate::input::pointer::{PointerEvent, PointerState};
use crate::renderer::traits::{Rgba, Surface};
use crate::systems::motion::step_particles;
use crate::systems::render::{draw_frame, FrameView};

/// Population to seed for a canvas of `size`.
pub fn target_population(size: Size) -> usize {
    let density = (size.area() / DENSITY_DIVISOR).round();
    let density = if density.is_finite() { density.max(0.0) as usize } else { 0 };
    density.clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// The whole simulation: particles, pointer and bounds.
///
/// Pointer handlers only write `pointer` or append a burst; `frame` is the
/// only place physics runs.
pub struct FieldState {
    particles: BoundedRing<Particle>,
    pointer: PointerState,
    size: Size,
    rng: Rng,
    frames: u64,
}

impl FieldState {
    /// Create a field for `size` and seed it.
    pub fn new(size: Size, seed: u64) -> Self {
        let mut state = Self {
            particles: BoundedRing::with_capacity(MAX_PARTICLES),
            pointer: PointerState::new(),
            size: Size::ZERO,
            rng: Rng::new(seed),
            frames: 0,
        };
        state.resize(size);
        state
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Oldest first.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Adopt new bounds and reseed from scratch.
    pub fn resize(&mut self, size: Size) {
        self.size = Size::sanitized(size.width, size.height);
        self.reseed();
    }

    /// Rebuild the population for the current bounds.
    pub fn reseed(&mut self) {
        let target = target_population(self.size);
        let Size { width, height } = self.size;
        self.particles.clear();
        for _ in 0..target {
            let pos = Vec2::new(self.rng.next_f32() * width, self.rng.next_f32() * height);
            let vel = Vec2::new(self.rng.centered(), self.rng.centered())
                * (BASE_SPEED * SEED_SPEED_SPREAD);
            self.particles.push(Particle::new(pos, vel));
        }
        log::debug!("plexus: seeded {} particles for {}x{}", target, width, height);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => self.pointer.move_to(x, y),
            PointerEvent::Leave => self.pointer.leave(),
            PointerEvent::Down { x, y } => {
                self.pointer.move_to(x, y);
                self.burst(x, y);
            }
        }
    }

    /// Inject `CLICK_BURST_COUNT` particles at (x, y), evicting the oldest
    /// past `MAX_PARTICLES`. Returns how many were evicted.
    pub fn burst(&mut self, x: f32, y: f32) -> usize {
        if !(x.is_finite() && y.is_finite()) {
            return 0;
        }
        let at = Vec2::new(x, y);
        let mut evicted = 0;
        for _ in 0..CLICK_BURST_COUNT {
            let vel = Vec2::new(self.rng.centered(), self.rng.centered()) * (CLICK_SPEED * 2.0);
            if self.particles.push(Particle::new(at, vel)).is_some() {
                evicted += 1;
            }
        }
        log::debug!("plexus: burst at ({}, {}), evicted {}", x, y, evicted);
        evicted
    }

    /// Advance physics by one frame without drawing. Returns how many
    /// particles the pointer pushed.
    pub fn step(&mut self) -> usize {
        let metrics = FieldMetrics::for_size(self.size);
        step_particles(
            self.particles.iter_mut(),
            &self.pointer,
            &metrics,
            self.size,
            &mut self.rng,
        )
    }

    /// Run one full animation frame: physics, then draw into `surface`.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, backdrop: Option<Rgba>) -> FrameStats {
        let pushed = self.step();
        self.frames += 1;

        let view = FrameView {
            particles: self.particles.as_slice(),
            pointer: self.pointer,
            size: self.size,
            metrics: FieldMetrics::for_size(self.size),
            backdrop,
        };
        let links = draw_frame(&view, surface);

        FrameStats {
            frame: self.frames,
            particles: view.particles.len(),
            links,
            pushed,
            pointer_active: self.pointer.active,
            size: self.size,
        }
    }

    /// True when every particle sits inside the bounds.
    pub fn all_in_bounds(&self) -> bool {
        self.particles.iter().all(|p| clamp_to(p.pos, self.size) == p.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{FRICTION_IDLE, MIN_FLOAT_SPEED};
    use crate::renderer::recorder::DrawRecorder;

    fn field(w: f32, h: f32) -> FieldState {
        FieldState::new(Size::new(w, h), 1234)
    }

    #[test]
    fn small_canvas_clamps_up_to_minimum() {
        // 800 * 600 / 9000 = 53.3 -> 53, below the floor.
        assert_eq!(target_population(Size::new(800.0, 600.0)), MIN_PARTICLES);
        assert_eq!(field(800.0, 600.0).len(), 90);
    }

    #[test]
    fn large_canvas_clamps_down_to_maximum() {
        // 1920 * 1080 / 9000 = 230.4
        assert_eq!(target_population(Size::new(1920.0, 1080.0)), MAX_PARTICLES);
    }

    #[test]
    fn mid_canvas_uses_density() {
        // 1000 * 1000 / 9000 = 111.1
        assert_eq!(target_population(Size::new(1000.0, 1000.0)), 111);
    }

    #[test]
    fn degenerate_sizes_still_get_minimum() {
        assert_eq!(target_population(Size::ZERO), MIN_PARTICLES);
        assert_eq!(target_population(Size::new(f32::INFINITY, 10.0)), MIN_PARTICLES);
        let state = FieldState::new(Size::new(f32::NAN, 300.0), 1);
        assert_eq!(state.size(), Size::new(0.0, 300.0));
        assert!(state.all_in_bounds());
    }

    #[test]
    fn resize_to_same_size_is_stable() {
        let mut state = field(1000.0, 1000.0);
        state.resize(Size::new(1000.0, 1000.0));
        let first = state.len();
        state.resize(Size::new(1000.0, 1000.0));
        assert_eq!(state.len(), first);
    }

    #[test]
    fn resize_replaces_population() {
        let mut state = field(1000.0, 1000.0);
        state.burst(10.0, 10.0);
        state.resize(Size::new(400.0, 300.0));
        assert_eq!(state.len(), MIN_PARTICLES);
        assert!(state.particles().all(|p| p.pos.x <= 400.0 && p.pos.y <= 300.0));
    }

    #[test]
    fn seeded_particles_are_in_bounds_and_moving() {
        let state = field(1200.0, 900.0);
        assert!(state.all_in_bounds());
        let max = BASE_SPEED * SEED_SPEED_SPREAD * 0.5;
        assert!(state.particles().all(|p| p.vel.x.abs() <= max && p.vel.y.abs() <= max));
    }

    #[test]
    fn burst_at_cap_keeps_cap_and_lands_on_click() {
        let mut state = field(1920.0, 1080.0);
        assert_eq!(state.len(), MAX_PARTICLES);
        let oldest_survivor = *state.particles().nth(CLICK_BURST_COUNT).unwrap();

        let evicted = state.burst(333.0, 222.0);

        assert_eq!(evicted, CLICK_BURST_COUNT);
        assert_eq!(state.len(), MAX_PARTICLES);
        assert_eq!(*state.particles().next().unwrap(), oldest_survivor);
        let newest: Vec<_> = state.particles().skip(MAX_PARTICLES - CLICK_BURST_COUNT).collect();
        assert!(newest.iter().all(|p| p.pos == Vec2::new(333.0, 222.0)));
        let max = CLICK_SPEED;
        assert!(newest.iter().all(|p| p.vel.x.abs() <= max && p.vel.y.abs() <= max));
    }

    #[test]
    fn burst_below_cap_grows_population() {
        let mut state = field(800.0, 600.0);
        assert_eq!(state.burst(1.0, 1.0), 0);
        assert_eq!(state.len(), MIN_PARTICLES + CLICK_BURST_COUNT);
    }

    #[test]
    fn repeated_bursts_never_exceed_cap() {
        let mut state = field(800.0, 600.0);
        for i in 0..30 {
            state.handle_pointer(PointerEvent::Down { x: i as f32 * 10.0, y: 50.0 });
            assert!(state.len() <= MAX_PARTICLES);
            assert!(state.len() >= MIN_PARTICLES);
        }
        assert_eq!(state.len(), MAX_PARTICLES);
    }

    #[test]
    fn pointer_down_activates_pointer() {
        let mut state = field(800.0, 600.0);
        state.handle_pointer(PointerEvent::Down { x: 40.0, y: 50.0 });
        assert_eq!(state.pointer().active_pos(), Some(Vec2::new(40.0, 50.0)));
    }

    #[test]
    fn non_finite_burst_is_ignored() {
        let mut state = field(800.0, 600.0);
        assert_eq!(state.burst(f32::NAN, 1.0), 0);
        assert_eq!(state.len(), MIN_PARTICLES);
    }

    #[test]
    fn particles_stay_in_bounds_over_many_frames() {
        let mut state = field(640.0, 480.0);
        let mut rec = DrawRecorder::new();
        for i in 0..600 {
            if i % 50 == 0 {
                state.handle_pointer(PointerEvent::Down { x: 320.0, y: 240.0 });
            }
            if i % 3 == 0 {
                state.handle_pointer(PointerEvent::Move { x: (i % 640) as f32, y: 100.0 });
            }
            if i % 97 == 0 {
                state.handle_pointer(PointerEvent::Leave);
            }
            state.frame(&mut rec, None);
            rec.take();
            assert!(state.all_in_bounds(), "escaped bounds on frame {}", i);
            assert!((MIN_PARTICLES..=MAX_PARTICLES).contains(&state.len()));
        }
    }

    #[test]
    fn leave_stops_pointer_forces_next_frame() {
        let mut state = field(800.0, 600.0);
        state.handle_pointer(PointerEvent::Move { x: 400.0, y: 300.0 });
        state.handle_pointer(PointerEvent::Leave);

        let before: Vec<Particle> = state.particles().copied().collect();
        assert_eq!(state.step(), 0);

        for (old, new) in before.iter().zip(state.particles()) {
            let damped = old.vel * FRICTION_IDLE;
            let speed = damped.length();
            if speed >= MIN_FLOAT_SPEED {
                // Only friction (and possibly a wall bounce) touched it.
                assert!((new.vel.x.abs() - damped.x.abs()).abs() < 1e-6);
                assert!((new.vel.y.abs() - damped.y.abs()).abs() < 1e-6);
            } else {
                // Floor nudges along the damped heading: direction preserved.
                assert!((new.vel.length() - MIN_FLOAT_SPEED).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn frame_reports_stats() {
        let mut state = field(800.0, 600.0);
        let mut rec = DrawRecorder::new();
        state.handle_pointer(PointerEvent::Move { x: 1.0, y: 1.0 });
        let stats = state.frame(&mut rec, None);
        assert_eq!(stats.frame, 1);
        assert_eq!(stats.particles, MIN_PARTICLES);
        assert!(stats.pointer_active);
        assert_eq!(stats.links, rec.lines().count());
        assert_eq!(rec.circles().count(), MIN_PARTICLES);
    }

    #[test]
    fn stats_count_pointer_pushes_until_leave() {
        let mut state = field(800.0, 600.0);
        let mut rec = DrawRecorder::new();
        state.handle_pointer(PointerEvent::Down { x: 400.0, y: 300.0 });
        // Off the click point so the burst is inside the radius but not coincident.
        state.handle_pointer(PointerEvent::Move { x: 405.0, y: 300.0 });
        let stats = state.frame(&mut rec, None);
        assert!(stats.pushed >= CLICK_BURST_COUNT, "pushed {}", stats.pushed);

        state.handle_pointer(PointerEvent::Leave);
        let stats = state.frame(&mut rec, None);
        assert_eq!(stats.pushed, 0);
        assert!(!stats.pointer_active);
    }
}
