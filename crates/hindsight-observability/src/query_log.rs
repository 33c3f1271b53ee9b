//! Query performance log: query text, latency, result count and top score.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub latency: Duration,
    pub result_count: usize,
    pub top_score: Option<f64>,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Entry stamped with the current time.
    pub fn new(
        query: impl Into<String>,
        latency: Duration,
        result_count: usize,
        top_score: Option<f64>,
    ) -> Self {
        Self {
            query: query.into(),
            latency,
            result_count,
            top_score,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Bounded log; the oldest entries fall off once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
    capacity: usize,
}

impl QueryLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            latency_us = entry.latency.as_micros() as u64,
            result_count = entry.result_count,
            top_score = ?entry.top_score,
            "query logged"
        );
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at percentile `p` in [0, 1] (nearest rank).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let last = latencies.len() - 1;
        let idx = ((p.clamp(0.0, 1.0) * last as f64).round() as usize).min(last);
        latencies[idx]
    }

    /// Share of logged queries that returned nothing.
    pub fn empty_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let empty = self.entries.iter().filter(|e| e.result_count == 0).count();
        empty as f64 / self.entries.len() as f64
    }
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(hindsight_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY)
    }
}
