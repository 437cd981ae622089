pub mod links;
pub mod motion;
pub mod render;
