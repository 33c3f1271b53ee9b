//! Structured log events for engine operations.
//!
//! Each function emits one `tracing` event whose `event` field names it.

/// A new entry was inserted.
pub fn entry_recorded(entry_id: &str, category: &str) {
    tracing::info!(
        event = "entry_recorded",
        entry_id = %entry_id,
        category = %category,
        "entry recorded"
    );
}

/// An incoming record was merged into an existing entry.
pub fn entry_merged(target_id: &str, similarity: f64, exact: bool, usage_count: u64) {
    tracing::info!(
        event = "entry_merged",
        target_id = %target_id,
        similarity = similarity,
        exact = exact,
        usage_count = usage_count,
        "entry merged"
    );
}

pub fn search_completed(query_terms: usize, hits: usize, top_score: Option<f64>) {
    tracing::debug!(
        event = "search_completed",
        query_terms = query_terms,
        hits = hits,
        top_score = ?top_score,
        "search completed"
    );
}

/// A proposal matched a recorded failure.
pub fn failure_matched(failure_id: &str, similarity: f64) {
    tracing::warn!(
        event = "failure_matched",
        failure_id = %failure_id,
        similarity = similarity,
        "proposal repeats a recorded failure"
    );
}

pub fn idf_recomputed(corpus_size: usize, vocabulary_size: usize, reason: &str) {
    tracing::info!(
        event = "idf_recomputed",
        corpus_size = corpus_size,
        vocabulary_size = vocabulary_size,
        reason = %reason,
        "idf recomputed"
    );
}

pub fn clustering_completed(k: usize, clusters: usize, entries: usize) {
    tracing::info!(
        event = "clustering_completed",
        k = k,
        clusters = clusters,
        entries = entries,
        "clustering completed"
    );
}

pub fn snapshot_exported(entries: usize, vocabulary_size: usize) {
    tracing::info!(
        event = "snapshot_exported",
        entries = entries,
        vocabulary_size = vocabulary_size,
        "snapshot exported"
    );
}

pub fn snapshot_imported(entries: usize, vocabulary_size: usize) {
    tracing::info!(
        event = "snapshot_imported",
        entries = entries,
        vocabulary_size = vocabulary_size,
        "snapshot imported"
    );
}

/// Caller input was rejected.
pub fn input_rejected(operation: &str, error_code: &str, message: &str) {
    tracing::warn!(
        event = "input_rejected",
        operation = %operation,
        error_code = %error_code,
        message = %message,
        "input rejected"
    );
}
