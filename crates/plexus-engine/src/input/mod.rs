pub mod pointer;

pub use pointer::{PointerEvent, PointerState};
