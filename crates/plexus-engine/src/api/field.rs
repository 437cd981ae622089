use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::api::types::{FrameStats, Size};
use crate::core::scheduler::{FrameHandle, FrameScheduler};
use crate::core::state::FieldState;
use crate::input::pointer::PointerEvent;
use crate::renderer::traits::{Rgba, Surface};

struct Inner<D> {
    state: FieldState,
    surface: Option<D>,
    backdrop: Option<Rgba>,
    pending: Option<FrameHandle>,
    last_stats: FrameStats,
}

impl<D> Inner<D> {
    fn mounted(&self) -> bool {
        self.surface.is_some()
    }
}

/// The particle field's public face: lifecycle plus pointer handlers.
///
/// While mounted, exactly one frame callback is pending with the scheduler
/// at any time. Each callback draws a frame and schedules the next one.
/// Callbacks hold only a weak reference, so dropping the field stops the
/// loop even without `unmount`.
pub struct ParticleField<S, D>
where
    S: FrameScheduler + Clone + 'static,
    D: Surface + 'static,
{
    inner: Rc<RefCell<Inner<D>>>,
    scheduler: S,
}

impl<S, D> ParticleField<S, D>
where
    S: FrameScheduler + Clone + 'static,
    D: Surface + 'static,
{
    pub fn new(scheduler: S, seed: u64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: FieldState::new(Size::ZERO, seed),
                surface: None,
                backdrop: None,
                pending: None,
                last_stats: FrameStats::default(),
            })),
            scheduler,
        }
    }

    /// Paint `color` under the particles every frame (`None` for transparent).
    pub fn with_backdrop(self, color: Option<Rgba>) -> Self {
        self.inner.borrow_mut().backdrop = color;
        self
    }

    /// Take `surface`, seed for `size` and start the render loop.
    ///
    /// Mounting again while mounted swaps the surface and reseeds; the
    /// running loop is reused, never duplicated.
    pub fn mount(&self, surface: D, size: Size) {
        let start_loop = {
            let mut inner = self.inner.borrow_mut();
            let was_mounted = inner.mounted();
            inner.surface = Some(surface);
            inner.state.resize(size);
            !was_mounted || inner.pending.is_none()
        };
        if start_loop {
            log::info!("plexus: mounted at {}x{}", size.width, size.height);
            schedule_frame(&self.inner, &self.scheduler);
        }
    }

    /// Stop the loop and release the surface. No drawing happens after return.
    pub fn unmount(&self) {
        let (pending, surface) = {
            let mut inner = self.inner.borrow_mut();
            (inner.pending.take(), inner.surface.take())
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
        if surface.is_some() {
            log::info!("plexus: unmounted");
        }
    }

    /// True while a surface is held and a frame is queued. A host that
    /// refused to schedule leaves the field holding a surface but stopped;
    /// mounting again retries.
    pub fn is_mounted(&self) -> bool {
        let inner = self.inner.borrow();
        inner.mounted() && inner.pending.is_some()
    }

    /// Container was resized. Ignored until mounted.
    pub fn resize(&self, size: Size) {
        let mut inner = self.inner.borrow_mut();
        if !inner.mounted() {
            return;
        }
        inner.state.resize(size);
    }

    pub fn on_pointer_move(&self, x: f32, y: f32) {
        self.pointer(PointerEvent::Move { x, y });
    }

    pub fn on_pointer_leave(&self) {
        self.pointer(PointerEvent::Leave);
    }

    pub fn on_pointer_down(&self, x: f32, y: f32) {
        self.pointer(PointerEvent::Down { x, y });
    }

    pub fn pointer(&self, event: PointerEvent) {
        self.inner.borrow_mut().state.handle_pointer(event);
    }

    /// Stats from the most recent frame.
    pub fn last_stats(&self) -> FrameStats {
        self.inner.borrow().last_stats
    }

    /// Read-only access to the simulation.
    pub fn with_state<R>(&self, f: impl FnOnce(&FieldState) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    /// Access to the mounted surface, e.g. to resize its backing store.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut D) -> R) -> Option<R> {
        self.inner.borrow_mut().surface.as_mut().map(f)
    }
}

impl<S, D> Drop for ParticleField<S, D>
where
    S: FrameScheduler + Clone + 'static,
    D: Surface + 'static,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

fn schedule_frame<S, D>(inner: &Rc<RefCell<Inner<D>>>, scheduler: &S)
where
    S: FrameScheduler + Clone + 'static,
    D: Surface + 'static,
{
    let weak: Weak<RefCell<Inner<D>>> = Rc::downgrade(inner);
    let next = scheduler.clone();
    let handle = scheduler.schedule(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            run_frame(&inner, &next);
        }
    }));
    if handle.is_none() {
        log::warn!("plexus: host refused to schedule a frame; loop stopped");
    }
    inner.borrow_mut().pending = handle;
}

fn run_frame<S, D>(inner: &Rc<RefCell<Inner<D>>>, scheduler: &S)
where
    S: FrameScheduler + Clone + 'static,
    D: Surface + 'static,
{
    {
        let mut guard = inner.borrow_mut();
        guard.pending = None;
        let Inner { state, surface, backdrop, last_stats, .. } = &mut *guard;
        let Some(surface) = surface.as_mut() else {
            return;
        };
        *last_stats = state.frame(surface, *backdrop);
    }
    schedule_frame(inner, scheduler);
}
