use serde::{Deserialize, Serialize};

use super::defaults;

/// Blend weights for query-time scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
    /// Query terms against entry keywords.
    pub keyword: f64,
    /// Query tags against entry tags.
    pub tag: f64,
    /// Query terms against title terms.
    pub title: f64,
    /// TF-IDF cosine between query and entry vectors.
    pub cosine: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
            tag: defaults::DEFAULT_TAG_WEIGHT,
            title: defaults::DEFAULT_TITLE_WEIGHT,
            cosine: defaults::DEFAULT_COSINE_WEIGHT,
        }
    }
}

impl SearchWeights {
    pub fn total(&self) -> f64 {
        self.keyword + self.tag + self.title + self.cosine
    }
}

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Result count when the caller does not pass one.
    pub default_top_k: usize,
    /// Minimum blended score when the caller does not pass one.
    pub default_min_score: f64,
    pub weights: SearchWeights,
    /// Expand query terms with their synonym group before scoring.
    pub query_expansion: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: defaults::DEFAULT_TOP_K,
            default_min_score: defaults::DEFAULT_MIN_SCORE,
            weights: SearchWeights::default(),
            query_expansion: defaults::DEFAULT_QUERY_EXPANSION,
        }
    }
}
