//! TF-IDF vectorization against the shared vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::idf::IdfTable;
use crate::vocabulary::Vocabulary;

/// Dense, L2-normalised weight vector. Slot `i` belongs to vocabulary term `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentVector {
    weights: Vec<f64>,
}

impl DocumentVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            weights: vec![0.0; len],
        }
    }

    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// Zero-pad up to `len`. Never truncates.
    pub fn pad_to(&mut self, len: usize) {
        if self.weights.len() < len {
            self.weights.resize(len, 0.0);
        }
    }

    /// Scale to unit length; a zero vector stays zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            for w in &mut self.weights {
                *w /= norm;
            }
        }
    }
}

/// Builds [`DocumentVector`]s. Pure given (terms, vocabulary, IDF).
#[derive(Debug, Clone)]
pub struct Vectorizer {
    use_idf: bool,
}

impl Vectorizer {
    pub fn new(use_idf: bool) -> Self {
        Self { use_idf }
    }

    pub fn uses_idf(&self) -> bool {
        self.use_idf
    }

    /// 1. raw counts, 2. `tf = count / max_count`, 3. × IDF (or 1.0),
    /// 4. slot from the vocabulary (growing it), 5. L2-normalise.
    ///
    /// Terms are visited in lexicographic order so new vocabulary indices are
    /// assigned deterministically. The result has the vocabulary's length after
    /// any growth.
    pub fn vectorize(
        &self,
        terms: &BTreeMap<String, u32>,
        vocabulary: &mut Vocabulary,
        idf: &IdfTable,
    ) -> DocumentVector {
        let max_count = terms.values().copied().max().unwrap_or(0);
        if max_count == 0 {
            return DocumentVector::zeros(vocabulary.len());
        }

        let slots: Vec<(usize, f64)> = terms
            .iter()
            .map(|(term, &count)| {
                let tf = count as f64 / max_count as f64;
                let weight = if self.use_idf { tf * idf.weight(term) } else { tf };
                (vocabulary.index_of(term), weight)
            })
            .collect();

        let mut vector = DocumentVector::zeros(vocabulary.len());
        for (slot, weight) in slots {
            vector.weights[slot] = weight;
        }
        vector.normalize();
        vector
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(true)
    }
}
