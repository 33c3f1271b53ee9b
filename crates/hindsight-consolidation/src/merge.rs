//! Merge an incoming record into an existing entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hindsight_core::entry::ValidatedRecord;
use hindsight_core::Entry;
use hindsight_text::{FeatureExtractor, Features};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergeReport {
    /// The incoming solution was new text and was appended as a delta.
    pub solution_appended: bool,
    pub usage_count: u64,
}

/// Fold `record` into `target`.
///
/// 1. append the incoming solution as a timestamped delta (skipped when the
///    text is already there)
/// 2. re-derive tags and keywords from the merged text fields
/// 3. union in the incoming record's own features
/// 4. average success rates, `usage_count += 1`, `updated_at = now`
pub fn merge_into(
    target: &mut Entry,
    record: &ValidatedRecord,
    incoming: &Features,
    extractor: &FeatureExtractor,
    now: DateTime<Utc>,
) -> MergeReport {
    let solution_appended = target.append_solution_delta(&record.solution, now);

    extractor.annotate(target);
    let mut merged = Features {
        terms: std::mem::take(&mut target.keywords),
        tags: std::mem::take(&mut target.tags),
    };
    merged.union(incoming);
    target.keywords = merged.terms;
    target.tags = merged.tags;

    target.average_success_rate(record.category.initial_success_rate(record.success_rate));
    target.usage_count += 1;
    target.updated_at = now;

    MergeReport {
        solution_appended,
        usage_count: target.usage_count,
    }
}
