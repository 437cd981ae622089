//! WASM bridge for the Plexus particle field.
//!
//! The page calls `field_mount("hero-particles", false)` once the container
//! is laid out and `field_unmount()` when it goes away. A single field is
//! kept per page in thread-local storage, since wasm-bindgen cannot export
//! the generic engine types directly.

pub mod canvas;
pub mod error;
pub mod runner;
pub mod scheduler;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use canvas::CanvasSurface;
pub use error::MountError;
pub use runner::{FieldRunner, Variant};
pub use scheduler::RafScheduler;

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&FieldRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow().as_ref().map(f))
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Errors only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Mount the field into the element with id `container_id`.
///
/// Replaces any field mounted earlier. Returns false, after logging a
/// warning, when the page cannot host the animation.
#[wasm_bindgen]
pub fn field_mount(container_id: &str, framed: bool) -> bool {
    init_logging();
    field_unmount();

    let variant = if framed { Variant::Framed } else { Variant::Bare };
    match FieldRunner::mount(container_id, variant, random_seed()) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            true
        }
        Err(err) => {
            log::warn!("plexus: particle field disabled: {}", err);
            false
        }
    }
}

/// Stop the animation and remove every listener. Safe to call when nothing
/// is mounted.
#[wasm_bindgen]
pub fn field_unmount() {
    // Dropped outside the borrow so teardown can't re-enter RUNNER.
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    drop(runner);
}

#[wasm_bindgen]
pub fn field_is_mounted() -> bool {
    with_runner(|r| r.field().is_mounted()).unwrap_or(false)
}

/// Stats of the last rendered frame as JSON, or `null` when unmounted.
#[wasm_bindgen]
pub fn field_stats_json() -> String {
    with_runner(|r| r.field().last_stats().to_json())
        .map(|json| {
            json.unwrap_or_else(|err| {
                log::warn!("plexus: could not serialize stats: {}", err);
                "null".to_string()
            })
        })
        .unwrap_or_else(|| "null".to_string())
}

// ---- Pointer input for hosts that route events themselves ----

#[wasm_bindgen]
pub fn field_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.field().on_pointer_move(x, y));
}

#[wasm_bindgen]
pub fn field_pointer_leave() {
    with_runner(|r| r.field().on_pointer_leave());
}

#[wasm_bindgen]
pub fn field_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.field().on_pointer_down(x, y));
}
