//! Query volume, hit rate, score distribution and most-served entries.

use serde::{Deserialize, Serialize};

const MOST_SERVED_LIMIT: usize = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalMetrics {
    pub queries: u64,
    /// Queries that returned at least one hit.
    pub queries_with_hits: u64,
    pub total_hits: u64,
    /// Sum of top-hit scores, for the average.
    top_score_sum: f64,
    /// Entry ids by how often they were the top hit, descending.
    pub most_served: Vec<(String, u64)>,
}

impl RetrievalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_query(&mut self, hits: usize, top: Option<(&str, f64)>) {
        self.queries += 1;
        self.total_hits += hits as u64;
        if let Some((id, score)) = top {
            self.queries_with_hits += 1;
            self.top_score_sum += score;
            self.record_served(id);
        }
    }

    fn record_served(&mut self, entry_id: &str) {
        match self.most_served.iter_mut().find(|(id, _)| id == entry_id) {
            Some(slot) => slot.1 += 1,
            None => self.most_served.push((entry_id.to_string(), 1)),
        }
        self.most_served.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        self.most_served.truncate(MOST_SERVED_LIMIT);
    }

    pub fn hit_rate(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.queries_with_hits as f64 / self.queries as f64
    }

    pub fn avg_top_score(&self) -> f64 {
        if self.queries_with_hits == 0 {
            return 0.0;
        }
        self.top_score_sum / self.queries_with_hits as f64
    }
}
