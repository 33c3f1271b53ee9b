//! Stable error codes for host boundaries (HTTP, CLI, bindings).

/// Every error enum implements this to expose a machine-readable code.
pub trait HindsightErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const ENTRY_NOT_FOUND: &str = "ENTRY_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";
