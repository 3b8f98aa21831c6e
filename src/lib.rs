//! Ordmask
//!
//! Masked-word candidate finder: builds positional letter indexes over a
//! word corpus and resolves mask queries into candidate lists.
//!
//! # Quick Start
//!
//! ```rust
//! use ordmask::index::build_index;
//! use ordmask::resolver::resolve_query;
//!
//! let index = build_index(&["bok", "bil", "bal", "katt"]);
//!
//! // Known letters at known positions, '_' for unknowns
//! assert_eq!(resolve_query(&index, "b__"), ["bal", "bil", "bok"]);
//!
//! // Optional second token: letters the word must contain somewhere
//! assert_eq!(resolve_query(&index, "____ a"), ["katt"]);
//! ```

// Core domain types
pub mod core;

// Index construction and lookups
pub mod index;

// Query resolution
pub mod resolver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
