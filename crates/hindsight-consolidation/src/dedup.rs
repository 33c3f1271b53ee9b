//! Insert-time deduplication: decide whether a new record merges into an
//! existing entry of the same bucket or becomes a new entry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use hindsight_core::config::{DedupConfig, SimilarityConfig};
use hindsight_core::entry::ValidatedRecord;
use hindsight_core::Entry;
use hindsight_text::{DedupBlend, Features};

/// Outcome of [`DedupMerger::propose_insert`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InsertProposal {
    Insert,
    Merge {
        target: String,
        similarity: f64,
        /// Matched on the normalised content hash; no scoring was needed.
        exact: bool,
    },
}

impl InsertProposal {
    pub fn is_merge(&self) -> bool {
        matches!(self, Self::Merge { .. })
    }
}

#[derive(Debug, Clone)]
pub struct DedupMerger {
    blend: DedupBlend,
    merge_threshold: f64,
    exact_hash_fast_path: bool,
}

impl DedupMerger {
    pub fn new(dedup: &DedupConfig, similarity: &SimilarityConfig) -> Self {
        Self {
            blend: DedupBlend::new(dedup, similarity),
            merge_threshold: dedup.merge_threshold,
            exact_hash_fast_path: dedup.exact_hash_fast_path,
        }
    }

    pub fn blend(&self) -> &DedupBlend {
        &self.blend
    }

    pub fn merge_threshold(&self) -> f64 {
        self.merge_threshold
    }

    /// Compare `record` against every existing entry in its bucket.
    ///
    /// Failures only dedup against failures, everything else against
    /// non-failures. The best blend score must be strictly above the merge
    /// threshold; on equal scores the earlier entry wins.
    pub fn propose_insert<'a, I>(
        &self,
        record: &ValidatedRecord,
        features: &Features,
        existing: I,
    ) -> InsertProposal
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let bucket = record.category.bucket();
        let candidates: Vec<&Entry> = existing
            .into_iter()
            .filter(|e| e.category.bucket() == bucket)
            .collect();
        if candidates.is_empty() {
            return InsertProposal::Insert;
        }

        if self.exact_hash_fast_path {
            let hash = Entry::compute_content_hash(
                &record.title,
                &record.problem,
                &record.solution,
                &record.context,
            );
            if let Some(hit) = candidates.iter().find(|e| e.content_hash == hash) {
                debug!(target_id = %hit.id, "exact content hash match");
                return InsertProposal::Merge {
                    target: hit.id.clone(),
                    similarity: 1.0,
                    exact: true,
                };
            }
        }

        let terms = features.term_set();
        let mut best: Option<(&Entry, f64)> = None;
        for entry in candidates {
            let score = self.blend.score(&terms, &entry.keyword_terms());
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) if score > self.merge_threshold => {
                debug!(target_id = %entry.id, similarity = score, "near-duplicate found");
                InsertProposal::Merge {
                    target: entry.id.clone(),
                    similarity: score,
                    exact: false,
                }
            }
            _ => InsertProposal::Insert,
        }
    }
}

impl Default for DedupMerger {
    fn default() -> Self {
        Self::new(&DedupConfig::default(), &SimilarityConfig::default())
    }
}
