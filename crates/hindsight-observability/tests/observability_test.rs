//! Tests for metrics, the query log, span macros and tracing setup.

use std::time::Duration;

use hindsight_observability::metrics::{ConsolidationMetrics, RetrievalMetrics};
use hindsight_observability::tracing_setup::{self, events, spans};
use hindsight_observability::{MetricsCollector, QueryLog, QueryLogEntry};

#[test]
fn retrieval_metrics_track_hit_rate_and_top_entries() {
    let mut m = RetrievalMetrics::new();
    m.record_query(3, Some(("a", 0.8)));
    m.record_query(0, None);
    m.record_query(1, Some(("b", 0.4)));
    m.record_query(2, Some(("a", 0.6)));

    assert_eq!(m.queries, 4);
    assert_eq!(m.total_hits, 6);
    assert!((m.hit_rate() - 0.75).abs() < 1e-12);
    assert!((m.avg_top_score() - 0.6).abs() < 1e-12);
    assert_eq!(m.most_served[0], ("a".to_string(), 2));
}

#[test]
fn consolidation_metrics_rates() {
    let mut m = ConsolidationMetrics::new();
    assert_eq!(m.merge_rate(), 0.0);
    m.record_insert();
    m.record_insert();
    m.record_insert();
    m.record_merge(true);
    m.record_failure_check(true);
    m.record_failure_check(false);

    assert!((m.merge_rate() - 0.25).abs() < 1e-12);
    assert_eq!(m.exact_merges, 1);
    assert!((m.failure_match_rate() - 0.5).abs() < 1e-12);
}

#[test]
fn collector_serializes_and_resets() {
    let mut c = MetricsCollector::new();
    c.consolidation.record_insert();
    let json = c.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["consolidation"]["inserts"], 1);
    c.reset();
    assert_eq!(c.consolidation.inserts, 0);
}

#[test]
fn query_log_is_bounded() {
    let mut log = QueryLog::with_capacity(3);
    for i in 0..5u64 {
        log.record(QueryLogEntry::new(format!("q{i}"), Duration::from_millis(i), 1, None));
    }
    assert_eq!(log.count(), 3);
    let queries: Vec<&str> = log.entries().map(|e| e.query.as_str()).collect();
    assert_eq!(queries, vec!["q2", "q3", "q4"]);
    assert_eq!(log.avg_latency(), Duration::from_millis(3));
    assert_eq!(log.latency_percentile(1.0), Duration::from_millis(4));
    assert_eq!(log.latency_percentile(0.0), Duration::from_millis(2));
}

#[test]
fn query_log_empty_rate() {
    let mut log = QueryLog::default();
    assert_eq!(log.empty_rate(), 0.0);
    log.record(QueryLogEntry::new("a", Duration::ZERO, 0, None));
    log.record(QueryLogEntry::new("b", Duration::ZERO, 2, Some(0.9)));
    assert!((log.empty_rate() - 0.5).abs() < 1e-12);
}

#[test]
fn spans_and_events_work_with_a_subscriber() {
    // May be false when another test in this binary installed one first.
    let _ = tracing_setup::init_tracing_with_filter("debug");
    tracing_setup::init_tracing();

    let span = hindsight_observability::search_span!(10usize, 0.3f64);
    let _guard = span.enter();
    events::entry_recorded("id-1", "bugfix");
    events::entry_merged("id-1", 0.9, false, 2);
    events::failure_matched("id-2", 0.75);
    assert_eq!(spans::names::SEARCH, "hindsight.search");
}
