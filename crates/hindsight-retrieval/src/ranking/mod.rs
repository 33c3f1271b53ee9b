//! Ranking: scoring plus the deterministic result order.

pub mod scorer;

use std::cmp::Ordering;

use hindsight_core::models::SearchHit;

/// Score descending, then higher `usage_count`, then earlier `created_at`.
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.entry.usage_count.cmp(&a.entry.usage_count))
        .then_with(|| a.entry.created_at.cmp(&b.entry.created_at))
}

/// Sort `hits` in place and keep the best `top_k`.
pub fn rank(hits: &mut Vec<SearchHit>, top_k: usize) {
    hits.sort_by(compare_hits);
    hits.truncate(top_k);
}
