use plexus_engine::{FrameCallback, FrameHandle, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `FrameScheduler` backed by `requestAnimationFrame`.
#[derive(Clone)]
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: FrameCallback) -> Option<FrameHandle> {
        // The JS closure frees itself once called. A cancelled one is leaked;
        // that happens once per unmount.
        let js = Closure::once_into_js(move |_timestamp: f64| callback());
        match self.window.request_animation_frame(js.unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id as u32)),
            Err(err) => {
                log::warn!("plexus: requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0 as i32) {
            log::warn!("plexus: cancelAnimationFrame failed: {:?}", err);
        }
    }
}
