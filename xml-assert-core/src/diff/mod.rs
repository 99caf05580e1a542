//! Difference detection and filtering.

pub mod engine;
pub mod filter;
pub mod result;

pub use engine::detect;
pub use filter::{filter_differences, ignorable_kinds};
pub use result::{Difference, DifferenceKind};
