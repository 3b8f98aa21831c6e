//! Core domain types
//!
//! Fundamental types for words, positional keys, and parsed queries. All
//! types here are pure values with no I/O and no behavior beyond parsing and
//! access.

mod key;
mod query;
mod word;

pub use key::PositionKey;
pub use query::{Mask, PLACEHOLDER, Query};
pub use word::Word;
