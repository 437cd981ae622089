pub mod recorder;
pub mod traits;

pub use recorder::{DrawCommand, DrawRecorder};
pub use traits::{GradientStop, Rgba, Surface};
