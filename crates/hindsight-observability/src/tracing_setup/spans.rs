//! Span macros per engine operation: record, search, failure check,
//! clustering, snapshot.
//!
//! The expanding crate must depend on `tracing`.

/// Span around `record_entry`.
#[macro_export]
macro_rules! record_span {
    ($category:expr) => {
        tracing::info_span!("hindsight.record", category = %$category)
    };
}

/// Span around `find_solution`.
#[macro_export]
macro_rules! search_span {
    ($top_k:expr, $min_score:expr) => {
        tracing::info_span!("hindsight.search", top_k = $top_k, min_score = $min_score)
    };
}

#[macro_export]
macro_rules! failure_check_span {
    ($threshold:expr) => {
        tracing::info_span!("hindsight.failure_check", threshold = $threshold)
    };
}

#[macro_export]
macro_rules! cluster_span {
    ($k:expr, $entries:expr) => {
        tracing::info_span!("hindsight.cluster", k = $k, entries = $entries)
    };
}

/// Span around snapshot export/import. `$direction` is `"export"` or `"import"`.
#[macro_export]
macro_rules! snapshot_span {
    ($direction:expr) => {
        tracing::info_span!("hindsight.snapshot", direction = %$direction)
    };
}

pub mod names {
    pub const RECORD: &str = "hindsight.record";
    pub const SEARCH: &str = "hindsight.search";
    pub const FAILURE_CHECK: &str = "hindsight.failure_check";
    pub const CLUSTER: &str = "hindsight.cluster";
    pub const SNAPSHOT: &str = "hindsight.snapshot";
}
