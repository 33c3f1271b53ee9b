use serde::{Deserialize, Serialize};

/// One k-means group of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Dense id in `0..cluster_count`, ordered by descending size.
    pub cluster_id: usize,
    pub entry_ids: Vec<String>,
    /// Most frequent member keywords, for display.
    pub label_terms: Vec<String>,
}
