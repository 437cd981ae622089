pub mod field;
pub mod types;
