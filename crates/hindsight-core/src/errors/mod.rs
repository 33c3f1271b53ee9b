//! Error handling for Hindsight.
//! One error enum per subsystem, `thiserror` only, aggregated into [`HindsightError`].

pub mod config_error;
pub mod error_code;
pub mod hindsight_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use error_code::HindsightErrorCode;
pub use hindsight_error::{HindsightError, HindsightResult};
pub use snapshot_error::SnapshotError;
