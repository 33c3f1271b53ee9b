//! ClusterEngine: k-means over entry vectors, labelled by distinctive terms.

pub mod kmeans;
pub mod labels;

use std::collections::BTreeMap;

use tracing::info;

use hindsight_core::config::ClusteringConfig;
use hindsight_core::errors::{HindsightError, HindsightResult};
use hindsight_core::models::Cluster;
use hindsight_text::DocumentVector;

/// One entry as the clusterer sees it.
#[derive(Debug, Clone, Copy)]
pub struct ClusterInput<'a> {
    pub id: &'a str,
    pub vector: &'a DocumentVector,
    pub keywords: &'a BTreeMap<String, u32>,
}

#[derive(Debug, Clone)]
pub struct ClusterEngine {
    max_iterations: usize,
    seed: u64,
    label_terms: usize,
}

impl ClusterEngine {
    pub fn new(config: &ClusteringConfig) -> Self {
        Self {
            max_iterations: config.max_iterations.max(1),
            seed: config.seed,
            label_terms: config.label_terms,
        }
    }

    /// Partition `items` into at most `min(k, n)` non-empty clusters.
    ///
    /// Every item lands in exactly one cluster. With fewer items than `k`
    /// every item is its own cluster. Clusters are numbered from 0 by
    /// descending size, ties by first member order; member ids keep input
    /// order.
    pub fn cluster(&self, items: &[ClusterInput<'_>], k: usize) -> HindsightResult<Vec<Cluster>> {
        if k == 0 {
            return Err(HindsightError::invalid_input("k", "must be at least 1"));
        }
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let groups: Vec<Vec<usize>> = if items.len() < k {
            (0..items.len()).map(|i| vec![i]).collect()
        } else {
            let dim = items.iter().map(|item| item.vector.len()).max().unwrap_or(0);
            let vectors: Vec<Vec<f64>> = items
                .iter()
                .map(|item| {
                    let mut v = item.vector.clone();
                    v.pad_to(dim);
                    v.as_slice().to_vec()
                })
                .collect();
            let outcome = kmeans::kmeans(&vectors, k, self.max_iterations, self.seed);
            info!(
                entries = items.len(),
                k,
                iterations = outcome.iterations,
                converged = outcome.converged,
                "k-means finished"
            );

            let mut groups = vec![Vec::new(); k];
            for (i, &c) in outcome.assignments.iter().enumerate() {
                groups[c].push(i);
            }
            groups.retain(|g| !g.is_empty());
            groups.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
            groups
        };

        let member_keywords: Vec<Vec<&BTreeMap<String, u32>>> = groups
            .iter()
            .map(|g| g.iter().map(|&i| items[i].keywords).collect())
            .collect();
        let labels = labels::label_terms(&member_keywords, self.label_terms);

        Ok(groups
            .into_iter()
            .zip(labels)
            .enumerate()
            .map(|(cluster_id, (members, label_terms))| Cluster {
                cluster_id,
                entry_ids: members.iter().map(|&i| items[i].id.to_string()).collect(),
                label_terms,
            })
            .collect())
    }
}

impl Default for ClusterEngine {
    fn default() -> Self {
        Self::new(&ClusteringConfig::default())
    }
}
