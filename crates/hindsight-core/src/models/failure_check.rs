use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Result of checking a proposed solution against recorded failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureCheck {
    pub is_failed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_failure: Option<Entry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl FailureCheck {
    pub fn clear() -> Self {
        Self {
            is_failed: false,
            matched_failure: None,
            similarity: None,
        }
    }

    pub fn matched(failure: Entry, similarity: f64) -> Self {
        Self {
            is_failed: true,
            matched_failure: Some(failure),
            similarity: Some(similarity),
        }
    }
}
