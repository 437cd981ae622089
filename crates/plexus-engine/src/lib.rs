//! Headless engine for an interactive field of linked, drifting particles.
//!
//! The engine owns the simulation and emits 2D draw commands against a
//! [`Surface`]; the host supplies the surface and a [`FrameScheduler`].
//! See `plexus-web` for the browser host.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::field::ParticleField;
pub use api::types::{FieldMetrics, FrameStats, Size};
pub use components::particle::Particle;
pub use self::core::ring::BoundedRing;
pub use self::core::rng::Rng;
pub use self::core::scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualScheduler};
pub use self::core::state::{target_population, FieldState};
pub use input::pointer::{PointerEvent, PointerState};
pub use renderer::recorder::{DrawCommand, DrawRecorder};
pub use renderer::traits::{GradientStop, Rgba, Surface};
