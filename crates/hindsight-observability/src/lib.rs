//! # hindsight-observability
//!
//! Structured tracing (JSON or human-readable, filtered by `HINDSIGHT_LOG`),
//! span macros per engine operation, structured events, engine metrics and a
//! bounded query log.

pub mod metrics;
pub mod query_log;
pub mod tracing_setup;

pub use metrics::MetricsCollector;
pub use query_log::{QueryLog, QueryLogEntry};
