//! Frame scheduling abstraction.
//!
//! The field never calls the host's display loop directly. It asks a
//! `FrameScheduler` for "one callback on the next frame" and reschedules
//! itself from inside that callback. The browser bridge backs this with
//! `requestAnimationFrame`; tests and headless hosts use `ManualScheduler`.

use std::cell::RefCell;
use std::rc::Rc;

/// Work to run on the next frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Identifies a scheduled callback so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u32);

/// Host-provided "run this on the next frame" service.
///
/// Implementations must never invoke the callback synchronously from
/// `schedule`; callers may hold borrows across the call.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame. `None` means the host refused;
    /// the callback will never run.
    fn schedule(&self, callback: FrameCallback) -> Option<FrameHandle>;

    /// Cancel a pending callback. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Default)]
struct ManualQueue {
    next_id: u32,
    pending: Vec<(FrameHandle, FrameCallback)>,
}

/// Scheduler that only runs callbacks when told to.
///
/// Clones share one queue, so a test can hand one clone to the field and
/// keep another to drive frames.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every callback that was pending when called. Callbacks scheduled
    /// while running wait for the next `advance`. Returns how many ran.
    pub fn advance(&self) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }

    /// Advance `frames` times. Returns the total number of callbacks run.
    pub fn advance_frames(&self, frames: usize) -> usize {
        (0..frames).map(|_| self.advance()).sum()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id = queue.next_id.wrapping_add(1);
        let handle = FrameHandle(queue.next_id);
        queue.pending.push((handle, callback));
        Some(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        // Dropped outside the borrow: a callback may own another clone of this scheduler.
        let removed: Vec<_> = {
            let mut queue = self.queue.borrow_mut();
            let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut queue.pending)
                .into_iter()
                .partition(|(h, _)| *h == handle);
            queue.pending = kept;
            gone
        };
        drop(removed);
    }
}
