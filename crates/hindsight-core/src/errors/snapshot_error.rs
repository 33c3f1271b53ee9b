//! Snapshot import errors.

use super::error_code::{self, HindsightErrorCode};

/// Errors raised when a snapshot cannot be imported as-is.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("duplicate entry id in snapshot: {id}")]
    DuplicateEntryId { id: String },

    #[error("duplicate vocabulary term in snapshot: {term}")]
    DuplicateTerm { term: String },
}

impl HindsightErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_ERROR
    }
}
