pub mod check;
pub mod common;
pub mod list;
pub mod validate;

pub use check::{CheckOptions, OutputFormat};
