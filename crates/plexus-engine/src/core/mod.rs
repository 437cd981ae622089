pub mod constants;
pub mod ring;
pub mod rng;
pub mod scheduler;
pub mod state;
