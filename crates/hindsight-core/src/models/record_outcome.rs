use serde::{Deserialize, Serialize};

/// What `record_entry` did with a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// Id of the stored entry: the new one, or the merge target.
    pub id: String,
    pub merged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_into: Option<String>,
    /// Dedup score against the merge target, when merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl RecordOutcome {
    pub fn inserted(id: String) -> Self {
        Self {
            id,
            merged: false,
            merged_into: None,
            similarity: None,
        }
    }

    pub fn merged(target: String, similarity: f64) -> Self {
        Self {
            id: target.clone(),
            merged: true,
            merged_into: Some(target),
            similarity: Some(similarity),
        }
    }
}
