//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_index_statistics};
