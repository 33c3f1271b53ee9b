use serde::{Deserialize, Serialize};

use super::defaults;

/// Prior-failure check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureConfig {
    /// Default similarity a proposal must exceed to count as a repeat.
    pub threshold: f64,
    /// Context similarity required when both sides carry a context.
    pub context_threshold: f64,
    /// Enforce `context_threshold`.
    pub require_context_match: bool,
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_FAILURE_THRESHOLD,
            context_threshold: defaults::DEFAULT_FAILURE_CONTEXT_THRESHOLD,
            require_context_match: defaults::DEFAULT_REQUIRE_CONTEXT_MATCH,
        }
    }
}
