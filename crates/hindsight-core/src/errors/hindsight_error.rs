use super::error_code::{self, HindsightErrorCode};
use super::{ConfigError, SnapshotError};

/// Top-level error for every engine operation.
///
/// Text processing itself never fails: empty or odd input degrades to empty
/// features and zero scores. Errors are reserved for caller mistakes and
/// configuration/snapshot problems.
#[derive(Debug, thiserror::Error)]
pub enum HindsightError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("entry not found: {id}")]
    EntryNotFound { id: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    Concurrency(String),
}

impl HindsightError {
    /// Shorthand for the common `InvalidInput` case.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl HindsightErrorCode for HindsightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::EntryNotFound { .. } => error_code::ENTRY_NOT_FOUND,
            Self::Config(e) => e.error_code(),
            Self::Snapshot(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::Concurrency(_) => error_code::CONCURRENCY_ERROR,
        }
    }
}

pub type HindsightResult<T> = Result<T, HindsightError>;
