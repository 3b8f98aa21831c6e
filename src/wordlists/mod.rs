//! Word lists
//!
//! Corpus acquisition for the CLI layer: an embedded default list compiled
//! into the binary, plus loaders for external text and JSON word lists. The
//! core itself never performs I/O; it consumes whatever ordered sequence of
//! words these helpers produce.

mod embedded;
pub mod loader;

pub use embedded::{ORDLISTA, ORDLISTA_COUNT};
