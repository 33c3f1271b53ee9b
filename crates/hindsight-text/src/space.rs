//! VectorSpace: the vocabulary, IDF table and vectorizer that every vector in
//! one corpus shares.

use std::collections::BTreeMap;

use hindsight_core::config::VectorizerConfig;
use hindsight_core::errors::SnapshotError;
use hindsight_core::models::IdfSnapshot;

use crate::idf::IdfTable;
use crate::vectorizer::{DocumentVector, Vectorizer};
use crate::vocabulary::Vocabulary;

/// Stamp recording the space state a vector was built under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceStamp {
    pub vocabulary_len: usize,
    pub idf_generation: u64,
}

#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: Vocabulary,
    idf: IdfTable,
    vectorizer: Vectorizer,
}

impl VectorSpace {
    pub fn new(config: &VectorizerConfig) -> Self {
        Self {
            vocabulary: Vocabulary::new(),
            idf: IdfTable::new(),
            vectorizer: Vectorizer::new(config.use_idf),
        }
    }

    /// Restore vocabulary and IDF from snapshot parts.
    pub fn restore(
        config: &VectorizerConfig,
        terms: Vec<String>,
        idf: &IdfSnapshot,
    ) -> Result<Self, SnapshotError> {
        Ok(Self {
            vocabulary: Vocabulary::from_terms(terms)?,
            idf: IdfTable::from_snapshot(idf),
            vectorizer: Vectorizer::new(config.use_idf),
        })
    }

    /// Vectorize a term bag, growing the vocabulary with unseen terms.
    pub fn vectorize(&mut self, terms: &BTreeMap<String, u32>) -> DocumentVector {
        self.vectorizer
            .vectorize(terms, &mut self.vocabulary, &self.idf)
    }

    /// Give every term of `terms` a slot without building a vector.
    pub fn register(&mut self, terms: &BTreeMap<String, u32>) {
        for term in terms.keys() {
            self.vocabulary.index_of(term);
        }
    }

    pub fn recompute_idf<'a, I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = &'a BTreeMap<String, u32>>,
    {
        self.idf.recompute(documents);
    }

    pub fn stamp(&self) -> SpaceStamp {
        SpaceStamp {
            vocabulary_len: self.vocabulary.len(),
            idf_generation: self.idf.generation(),
        }
    }

    /// A vector built under `stamp` needs rebuilding: the vocabulary grew or
    /// the IDF weights changed.
    pub fn is_stale(&self, stamp: SpaceStamp) -> bool {
        stamp != self.stamp()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }
}
