//! Command implementations

pub mod find;
pub mod interactive;
pub mod stats;

pub use find::run_find;
pub use interactive::run_interactive;
pub use stats::{IndexStatistics, collect_statistics};
