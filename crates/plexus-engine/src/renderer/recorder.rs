use glam::Vec2;

use super::traits::{GradientStop, Rgba, Surface};

/// One primitive issued to a `Surface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { width: f32, height: f32, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Glow { center: Vec2, radius: f32, stops: Vec<GradientStop> },
}

/// In-memory `Surface` that records every command it receives.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn glows(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Glow { .. }))
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }
}

impl Surface for DrawRecorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { width, height, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::Glow {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut rec = DrawRecorder::new();
        rec.clear(10.0, 10.0);
        rec.fill_circle(Vec2::new(1.0, 2.0), 3.0, Rgba::new(0, 0, 0, 1.0));
        rec.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, Rgba::new(0, 0, 0, 0.5));
        assert_eq!(rec.commands().len(), 3);
        assert!(matches!(rec.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(rec.circles().count(), 1);
        assert_eq!(rec.lines().count(), 1);
    }

    #[test]
    fn take_empties_recorder() {
        let mut rec = DrawRecorder::new();
        rec.clear(1.0, 1.0);
        let cmds = rec.take();
        assert_eq!(cmds.len(), 1);
        assert!(rec.commands().is_empty());
    }
}
