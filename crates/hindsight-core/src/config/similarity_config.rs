use serde::{Deserialize, Serialize};

use super::defaults;

/// Shared similarity constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Credit for a substring (not exact) term match in overlap scoring.
    pub partial_match_weight: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            partial_match_weight: defaults::DEFAULT_PARTIAL_MATCH_WEIGHT,
        }
    }
}
