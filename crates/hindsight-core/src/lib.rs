//! # hindsight-core
//!
//! Foundation crate for the Hindsight experience engine.
//! Defines entries, categories, errors, config, result models and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entry;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::HindsightConfig;
pub use entry::{Category, Entry, RecordRequest};
pub use errors::{HindsightError, HindsightResult};
