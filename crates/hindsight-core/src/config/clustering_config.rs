use serde::{Deserialize, Serialize};

use super::defaults;

/// K-means clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Hard cap on assign/update rounds.
    pub max_iterations: usize,
    /// Seed for centroid initialisation.
    pub seed: u64,
    /// Number of label terms reported per cluster.
    pub label_terms: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::DEFAULT_CLUSTER_MAX_ITERATIONS,
            seed: defaults::DEFAULT_CLUSTER_SEED,
            label_terms: defaults::DEFAULT_CLUSTER_LABEL_TERMS,
        }
    }
}
