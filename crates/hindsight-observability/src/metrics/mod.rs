//! Engine metrics registry.

pub mod consolidation_metrics;
pub mod retrieval_metrics;

pub use consolidation_metrics::ConsolidationMetrics;
pub use retrieval_metrics::RetrievalMetrics;

/// Owns the per-concern collectors. Serializable for hosts that expose it.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MetricsCollector {
    pub retrieval: RetrievalMetrics,
    pub consolidation: ConsolidationMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
