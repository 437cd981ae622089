use glam::Vec2;

/// Pointer events the field understands, in canvas-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The cursor/touch moved to (x, y).
    Move { x: f32, y: f32 },
    /// The pointer left the container.
    Leave,
    /// A click/touch began at (x, y).
    Down { x: f32, y: f32 },
}

/// Latest known pointer position.
///
/// Written by event handlers, read once per frame. Events are never queued:
/// the last write before a frame wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub active: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position and mark the pointer active. Non-finite
    /// coordinates are dropped and the previous state kept.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.pos = Vec2::new(x, y);
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }

    /// Position if the pointer is over the field.
    pub fn active_pos(&self) -> Option<Vec2> {
        self.active.then_some(self.pos)
    }
}
