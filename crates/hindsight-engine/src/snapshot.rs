//! Snapshot export/import: the engine's only persistence contract.

use hindsight_core::constants::{MAX_SUCCESS_RATE, SNAPSHOT_FORMAT_VERSION};
use hindsight_core::errors::{HindsightError, HindsightResult, SnapshotError};
use hindsight_core::models::Snapshot;
use hindsight_core::HindsightConfig;
use hindsight_retrieval::RetrievalIndex;
use hindsight_text::{FeatureExtractor, VectorSpace};

/// Capture entries (insertion order), vocabulary (index order) and IDF.
pub fn build(index: &RetrievalIndex) -> Snapshot {
    let space = index.space();
    Snapshot::new(
        index.entries().cloned().collect(),
        space.vocabulary().terms().to_vec(),
        space.idf().to_snapshot(),
    )
}

/// Rebuild an index from a snapshot.
///
/// Rejects an unknown format version, duplicate entry ids or vocabulary terms,
/// empty ids and out-of-range success rates. Nothing is partially applied.
/// Derived features are rebuilt from entry text by
/// [`RetrievalIndex::from_entries`].
pub fn restore(config: &HindsightConfig, snapshot: Snapshot) -> HindsightResult<RetrievalIndex> {
    if snapshot.version != SNAPSHOT_FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_FORMAT_VERSION,
        }
        .into());
    }
    for entry in &snapshot.entries {
        if entry.id.trim().is_empty() {
            return Err(HindsightError::invalid_input("snapshot.entries.id", "must not be empty"));
        }
        if let Some(rate) = entry.success_rate {
            if !(0.0..=MAX_SUCCESS_RATE).contains(&rate) {
                return Err(HindsightError::invalid_input(
                    "snapshot.entries.success_rate",
                    format!("entry {} has success rate {rate}", entry.id),
                ));
            }
        }
    }

    let space = VectorSpace::restore(&config.vectorizer, snapshot.vocabulary, &snapshot.idf)?;
    let extractor = FeatureExtractor::new(config.extraction.clone());
    Ok(RetrievalIndex::from_entries(extractor, space, snapshot.entries)?)
}
