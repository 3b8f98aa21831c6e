//! Read-only word indexes built from a corpus
//!
//! Construction happens once at startup; the resulting [`WordIndex`] is
//! passed by shared reference into the resolver and never mutated again.

mod builder;
mod word_index;

pub use builder::{build_index, build_index_parallel};
pub use word_index::WordIndex;
