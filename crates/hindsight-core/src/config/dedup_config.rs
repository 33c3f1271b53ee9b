use serde::{Deserialize, Serialize};

use super::defaults;

/// Insert-time deduplication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Best-match score above which a new entry merges into an existing one.
    pub merge_threshold: f64,
    /// Weight of the symmetric substring overlap in the dedup blend.
    pub substring_weight: f64,
    /// Weight of the Jaccard index in the dedup blend.
    pub jaccard_weight: f64,
    /// Merge immediately when the normalised content hash matches.
    pub exact_hash_fast_path: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            merge_threshold: defaults::DEFAULT_MERGE_THRESHOLD,
            substring_weight: defaults::DEFAULT_DEDUP_SUBSTRING_WEIGHT,
            jaccard_weight: defaults::DEFAULT_DEDUP_JACCARD_WEIGHT,
            exact_hash_fast_path: defaults::DEFAULT_EXACT_HASH_FAST_PATH,
        }
    }
}
