//! RetrievalIndex: the corpus, its title-term cache and its vector cache.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use tracing::debug;

use hindsight_core::errors::{HindsightError, HindsightResult, SnapshotError};
use hindsight_core::models::SearchHit;
use hindsight_core::Entry;
use hindsight_text::similarity::cosine;
use hindsight_text::space::SpaceStamp;
use hindsight_text::{DocumentVector, FeatureExtractor, Features, VectorSpace};

use crate::ranking::{self, scorer::QueryScorer};

#[derive(Debug, Clone)]
struct CachedVector {
    vector: DocumentVector,
    stamp: SpaceStamp,
}

#[derive(Debug, Clone)]
struct Slot {
    entry: Entry,
    title_terms: BTreeSet<String>,
    vector: Option<CachedVector>,
}

/// Entries in insertion order with an id → position map.
///
/// Every entry's terms are registered in the vocabulary when it is added or
/// updated. Vectors are cached with the [`SpaceStamp`] they were built under
/// and rebuilt on demand once the IDF table changes; vocabulary growth alone
/// only appends zero slots, so those vectors are padded instead.
#[derive(Debug, Clone)]
pub struct RetrievalIndex {
    extractor: FeatureExtractor,
    space: VectorSpace,
    slots: Vec<Slot>,
    positions: HashMap<String, usize>,
}

impl RetrievalIndex {
    pub fn new(extractor: FeatureExtractor, space: VectorSpace) -> Self {
        Self {
            extractor,
            space,
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Rebuild an index from restored parts. Vectors are built lazily.
    ///
    /// Tags, keywords and the content hash are re-derived from each entry's
    /// text under this index's extractor. When the stored hash still matches
    /// the text, the stored features are kept on top of the fresh ones since
    /// they carry terms merged in from earlier records. A mismatch means the
    /// text was edited outside the engine, and only the fresh features stay.
    pub fn from_entries(
        extractor: FeatureExtractor,
        space: VectorSpace,
        entries: Vec<Entry>,
    ) -> Result<Self, SnapshotError> {
        let mut index = Self::new(extractor, space);
        for mut entry in entries {
            if index.positions.contains_key(&entry.id) {
                return Err(SnapshotError::DuplicateEntryId { id: entry.id });
            }
            rederive_features(&index.extractor, &mut entry);
            index.space.register(&entry.keywords);
            let title_terms = index.title_terms(&entry);
            index.positions.insert(entry.id.clone(), index.slots.len());
            index.slots.push(Slot {
                entry,
                title_terms,
                vector: None,
            });
        }
        Ok(index)
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.positions.get(id).map(|&pos| &self.slots[pos].entry)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().map(|slot| &slot.entry)
    }

    /// Index a new entry and build its vector.
    pub fn add(&mut self, entry: Entry) -> HindsightResult<()> {
        if self.positions.contains_key(&entry.id) {
            return Err(HindsightError::invalid_input(
                "id",
                format!("entry {} is already indexed", entry.id),
            ));
        }
        let title_terms = self.title_terms(&entry);
        let vector = self.space.vectorize(&entry.keywords);
        let stamp = self.space.stamp();
        self.positions.insert(entry.id.clone(), self.slots.len());
        self.slots.push(Slot {
            entry,
            title_terms,
            vector: Some(CachedVector { vector, stamp }),
        });
        Ok(())
    }

    /// Mutate an entry in place, then re-derive its title terms and vector.
    ///
    /// The closure gets the index's extractor for re-annotation and must not
    /// change the id.
    pub fn update<F, T>(&mut self, id: &str, f: F) -> HindsightResult<T>
    where
        F: FnOnce(&mut Entry, &FeatureExtractor) -> T,
    {
        let pos = *self
            .positions
            .get(id)
            .ok_or_else(|| HindsightError::EntryNotFound { id: id.to_string() })?;
        let slot = &mut self.slots[pos];
        let out = f(&mut slot.entry, &self.extractor);
        debug_assert_eq!(slot.entry.id, id);
        slot.title_terms = self.extractor.extract(&slot.entry.title).term_set();
        let vector = self.space.vectorize(&slot.entry.keywords);
        slot.vector = Some(CachedVector {
            vector,
            stamp: self.space.stamp(),
        });
        Ok(out)
    }

    /// Drop an entry from the index. Positions after it shift down by one.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let pos = self.positions.remove(id)?;
        let slot = self.slots.remove(pos);
        for later in &self.slots[pos..] {
            if let Some(p) = self.positions.get_mut(&later.entry.id) {
                *p -= 1;
            }
        }
        Some(slot.entry)
    }

    /// Bump an entry's usage after it was served as the top hit.
    pub fn record_hit(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        match self.positions.get(id) {
            Some(&pos) => {
                self.slots[pos].entry.record_hit(now);
                true
            }
            None => false,
        }
    }

    /// Rebuild IDF weights over every indexed entry's keywords.
    pub fn recompute_idf(&mut self) {
        self.space
            .recompute_idf(self.slots.iter().map(|slot| &slot.entry.keywords));
    }

    /// Bring every cached vector up to the current space. Returns how many
    /// were rebuilt from scratch.
    pub fn refresh_vectors(&mut self) -> usize {
        for slot in &self.slots {
            self.space.register(&slot.entry.keywords);
        }
        let mut rebuilt = 0;
        for slot in &mut self.slots {
            if refresh_slot(&mut self.space, slot) {
                rebuilt += 1;
            }
        }
        if rebuilt > 0 {
            debug!(rebuilt, total = self.slots.len(), "vector cache refreshed");
        }
        rebuilt
    }

    /// Cached vector for `id`, only if it matches the current space.
    pub fn vector(&self, id: &str) -> Option<&DocumentVector> {
        let slot = &self.slots[*self.positions.get(id)?];
        let current = self.space.stamp();
        slot.vector
            .as_ref()
            .filter(|cached| cached.stamp == current)
            .map(|cached| &cached.vector)
    }

    /// Number of cached vectors that match the current space.
    pub fn fresh_vectors(&self) -> usize {
        let current = self.space.stamp();
        self.slots
            .iter()
            .filter(|slot| matches!(&slot.vector, Some(c) if c.stamp == current))
            .count()
    }

    /// Rank non-failure entries against `query`.
    ///
    /// Hits scoring at least `min_score` (and above zero) are ordered by
    /// [`ranking::compare_hits`] and cut to `top_k`. The first hit is counted as
    /// used: its stored entry gets `usage_count += 1` and `updated_at = now`, and
    /// the returned hit carries that updated state.
    pub fn search(
        &mut self,
        query: &Features,
        top_k: usize,
        min_score: f64,
        scorer: &QueryScorer,
        now: DateTime<Utc>,
    ) -> Vec<SearchHit> {
        if top_k == 0 || self.slots.is_empty() {
            return Vec::new();
        }
        let prepared = scorer.prepare(query);
        if prepared.is_empty() {
            return Vec::new();
        }

        let query_vector = if scorer.uses_cosine() {
            let vector = self.space.vectorize(&query.terms);
            self.refresh_vectors();
            Some(vector)
        } else {
            None
        };

        let mut hits: Vec<SearchHit> = self
            .slots
            .iter()
            .filter(|slot| !slot.entry.is_failure())
            .filter_map(|slot| {
                let cos = match (&query_vector, &slot.vector) {
                    (Some(q), Some(cached)) => cosine(q.as_slice(), cached.vector.as_slice()),
                    _ => 0.0,
                };
                let breakdown = scorer.breakdown(&prepared, &slot.entry, &slot.title_terms, cos);
                let score = scorer.blend(&breakdown);
                (score > 0.0 && score >= min_score).then(|| SearchHit {
                    entry: slot.entry.clone(),
                    score,
                    breakdown,
                })
            })
            .collect();

        ranking::rank(&mut hits, top_k);

        if let Some(top) = hits.first_mut() {
            if let Some(&pos) = self.positions.get(&top.entry.id) {
                self.slots[pos].entry.record_hit(now);
                top.entry = self.slots[pos].entry.clone();
            }
        }

        debug!(
            query_terms = prepared.terms.len(),
            query_tags = prepared.tags.len(),
            hits = hits.len(),
            "search ranked"
        );
        hits
    }

    fn title_terms(&self, entry: &Entry) -> BTreeSet<String> {
        self.extractor.extract(&entry.title).term_set()
    }
}

/// Returns true when the vector had to be rebuilt.
fn refresh_slot(space: &mut VectorSpace, slot: &mut Slot) -> bool {
    let current = space.stamp();
    match &mut slot.vector {
        Some(cached) if cached.stamp == current => false,
        Some(cached) if cached.stamp.idf_generation == current.idf_generation => {
            cached.vector.pad_to(current.vocabulary_len);
            cached.stamp = current;
            false
        }
        _ => {
            let vector = space.vectorize(&slot.entry.keywords);
            slot.vector = Some(CachedVector {
                vector,
                stamp: space.stamp(),
            });
            true
        }
    }
}

fn rederive_features(extractor: &FeatureExtractor, entry: &mut Entry) {
    let stored = Features {
        terms: std::mem::take(&mut entry.keywords),
        tags: std::mem::take(&mut entry.tags),
    };
    let stored_hash = std::mem::take(&mut entry.content_hash);
    entry.refresh_content_hash();
    extractor.annotate(entry);
    if entry.content_hash == stored_hash {
        let mut merged = Features {
            terms: std::mem::take(&mut entry.keywords),
            tags: std::mem::take(&mut entry.tags),
        };
        merged.union(&stored);
        entry.keywords = merged.terms;
        entry.tags = merged.tags;
    } else {
        debug!(entry_id = %entry.id, "text changed since export, features re-derived");
    }
}
