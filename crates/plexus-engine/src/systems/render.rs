use crate::api::types::{FieldMetrics, Size};
use crate::components::particle::Particle;
use crate::core::constants::{LINK_COLOR, LINK_WIDTH, PARTICLE_COLOR, PARTICLE_RADIUS};
#[cfg(feature = "glow")]
use crate::core::constants::GLOW_STOPS;
use crate::input::pointer::PointerState;
use crate::renderer::traits::{Rgba, Surface};
use crate::systems::links::for_each_link;

/// Everything one frame needs to draw, borrowed from the field state.
pub struct FrameView<'a> {
    pub particles: &'a [Particle],
    pub pointer: PointerState,
    pub size: Size,
    pub metrics: FieldMetrics,
    /// Solid fill painted under the particles (`framed` variant).
    pub backdrop: Option<Rgba>,
}

/// Draw one frame: clear, optional backdrop, particles, links, pointer glow.
/// Returns the number of links drawn.
pub fn draw_frame<S: Surface + ?Sized>(view: &FrameView<'_>, surface: &mut S) -> usize {
    let Size { width, height } = view.size;
    surface.clear(width, height);
    if let Some(color) = view.backdrop {
        surface.fill_rect(width, height, color);
    }

    for p in view.particles {
        surface.fill_circle(p.pos, PARTICLE_RADIUS, PARTICLE_COLOR);
    }

    let links = for_each_link(view.particles, view.metrics.link_distance, |from, to, alpha| {
        surface.stroke_line(from, to, LINK_WIDTH, LINK_COLOR.with_alpha(alpha));
    });

    #[cfg(feature = "glow")]
    if let Some(at) = view.pointer.active_pos() {
        surface.fill_radial_glow(at, view.metrics.pointer_radius, &GLOW_STOPS);
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCommand, DrawRecorder};
    use glam::Vec2;

    fn view<'a>(particles: &'a [Particle], pointer: PointerState) -> FrameView<'a> {
        let size = Size::new(800.0, 600.0);
        FrameView {
            particles,
            pointer,
            size,
            metrics: FieldMetrics::for_size(size),
            backdrop: None,
        }
    }

    fn particle(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn clears_first_then_draws_particles() {
        let particles = [particle(10.0, 10.0), particle(700.0, 500.0)];
        let mut rec = DrawRecorder::new();
        let links = draw_frame(&view(&particles, PointerState::new()), &mut rec);

        assert_eq!(links, 0);
        assert_eq!(
            rec.commands()[0],
            DrawCommand::Clear { width: 800.0, height: 600.0 }
        );
        assert_eq!(rec.circles().count(), 2);
        assert_eq!(rec.glows().count(), 0);
    }

    #[test]
    fn close_particles_are_linked() {
        let particles = [particle(100.0, 100.0), particle(150.0, 100.0)];
        let mut rec = DrawRecorder::new();
        let links = draw_frame(&view(&particles, PointerState::new()), &mut rec);

        assert_eq!(links, 1);
        let first = rec.lines().next();
        match first {
            Some(DrawCommand::Line { from, to, width, color }) => {
                assert_eq!(*from, Vec2::new(100.0, 100.0));
                assert_eq!(*to, Vec2::new(150.0, 100.0));
                assert_eq!(*width, LINK_WIDTH);
                assert!(color.a > 0.0 && color.a <= 0.7);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn farther_links_are_fainter() {
        let particles = [particle(100.0, 100.0), particle(160.0, 100.0), particle(100.0, 300.0)];
        let mut rec = DrawRecorder::new();
        draw_frame(&view(&particles, PointerState::new()), &mut rec);

        let alphas: Vec<(f32, f32)> = rec
            .lines()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, color, .. } => Some((from.distance(*to), color.a)),
                _ => None,
            })
            .collect();
        let (near, far) = if alphas[0].0 < alphas[1].0 {
            (alphas[0], alphas[1])
        } else {
            (alphas[1], alphas[0])
        };
        assert!(near.1 > far.1, "near {:?} far {:?}", near, far);
    }

    #[cfg(feature = "glow")]
    #[test]
    fn active_pointer_gets_glow_last() {
        let particles = [particle(10.0, 10.0)];
        let mut pointer = PointerState::new();
        pointer.move_to(400.0, 300.0);
        let mut rec = DrawRecorder::new();
        draw_frame(&view(&particles, pointer), &mut rec);

        let last = rec.commands().last();
        match last {
            Some(DrawCommand::Glow { center, radius, stops }) => {
                assert_eq!(*center, Vec2::new(400.0, 300.0));
                assert!((radius - 149.6).abs() < 1e-3);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[2].color.a, 0.0);
            }
            other => panic!("expected glow last, got {:?}", other),
        }
    }

    #[test]
    fn backdrop_follows_clear() {
        let mut v = view(&[], PointerState::new());
        v.backdrop = Some(Rgba::new(255, 255, 255, 1.0));
        let mut rec = DrawRecorder::new();
        draw_frame(&v, &mut rec);
        assert!(matches!(rec.commands()[1], DrawCommand::FillRect { .. }));
    }
}
