//! Corpus-growth metrics: inserts vs merges, failure checks, clustering and
//! IDF rebuilds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsolidationMetrics {
    pub inserts: u64,
    pub merges: u64,
    /// Merges decided by the content-hash fast path.
    pub exact_merges: u64,
    pub failure_checks: u64,
    pub failures_matched: u64,
    pub clustering_runs: u64,
    pub idf_recomputes: u64,
}

impl ConsolidationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub fn record_merge(&mut self, exact: bool) {
        self.merges += 1;
        if exact {
            self.exact_merges += 1;
        }
    }

    pub fn record_failure_check(&mut self, matched: bool) {
        self.failure_checks += 1;
        if matched {
            self.failures_matched += 1;
        }
    }

    pub fn record_clustering(&mut self) {
        self.clustering_runs += 1;
    }

    pub fn record_idf_recompute(&mut self) {
        self.idf_recomputes += 1;
    }

    /// Share of recorded entries that were folded into existing ones.
    pub fn merge_rate(&self) -> f64 {
        let total = self.inserts + self.merges;
        if total == 0 {
            return 0.0;
        }
        self.merges as f64 / total as f64
    }

    pub fn failure_match_rate(&self) -> f64 {
        if self.failure_checks == 0 {
            return 0.0;
        }
        self.failures_matched as f64 / self.failure_checks as f64
    }
}
