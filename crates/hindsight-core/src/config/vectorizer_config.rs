use serde::{Deserialize, Serialize};

use super::defaults;

/// When the IDF table is rebuilt from the corpus.
///
/// Between rebuilds, terms the table has never seen are weighted with a
/// neutral multiplier of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IdfRefreshPolicy {
    /// Rebuild after every insert or merge.
    EachInsert,
    /// Rebuild once `batch_size` inserts or merges have accumulated.
    BatchOnly { batch_size: usize },
    /// Rebuild only when the host calls `recompute_idf`.
    Manual,
}

impl Default for IdfRefreshPolicy {
    fn default() -> Self {
        Self::BatchOnly {
            batch_size: defaults::DEFAULT_IDF_BATCH_SIZE,
        }
    }
}

/// Vectorizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Multiply term frequency by IDF. When false every weight is tf only.
    pub use_idf: bool,
    /// IDF rebuild policy.
    pub idf_refresh: IdfRefreshPolicy,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            use_idf: defaults::DEFAULT_USE_IDF,
            idf_refresh: IdfRefreshPolicy::default(),
        }
    }
}
