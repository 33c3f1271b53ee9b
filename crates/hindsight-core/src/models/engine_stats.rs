use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entry::Category;

/// Point-in-time summary of an engine's corpus and vector space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineStats {
    pub total_entries: usize,
    pub entries_by_category: BTreeMap<Category, usize>,
    pub vocabulary_size: usize,
    /// Corpus size at the last IDF rebuild.
    pub idf_corpus_size: usize,
    /// Inserts and merges since the last IDF rebuild.
    pub pending_idf_updates: usize,
    pub cached_vectors: usize,
}
