//! Similarity signals: cosine on vectors, Jaccard and weighted substring
//! overlap on term sets, and the dedup blend.
//!
//! Every signal is in [0, 1]; every division by zero resolves to 0.

use std::collections::BTreeSet;

use hindsight_core::config::{DedupConfig, SimilarityConfig};

/// Cosine similarity. The shorter vector is treated as zero-padded, so
/// vectors built before and after vocabulary growth compare correctly.
/// Zero-magnitude input → 0.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    // Slots past the shorter length multiply against zero: they only add to
    // the longer vector's magnitude.
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
    }
    for x in a {
        mag_a += x * x;
    }
    for y in b {
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

/// `|A ∩ B| / |A ∪ B|`; 0 when either set is empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Directional weighted overlap of `query` terms found in `candidate`.
///
/// Exact membership earns 1.0; a substring relation in either direction earns
/// `partial_weight`. The sum is divided by `max(|query|, |candidate|)`.
pub fn substring_overlap(
    query: &BTreeSet<String>,
    candidate: &BTreeSet<String>,
    partial_weight: f64,
) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let accumulated: f64 = query
        .iter()
        .map(|term| {
            if candidate.contains(term) {
                1.0
            } else if candidate
                .iter()
                .any(|c| c.contains(term.as_str()) || term.contains(c.as_str()))
            {
                partial_weight
            } else {
                0.0
            }
        })
        .sum();
    (accumulated / query.len().max(candidate.len()) as f64).clamp(0.0, 1.0)
}

/// Mean of both directions of [`substring_overlap`].
pub fn symmetric_substring_overlap(
    a: &BTreeSet<String>,
    b: &BTreeSet<String>,
    partial_weight: f64,
) -> f64 {
    (substring_overlap(a, b, partial_weight) + substring_overlap(b, a, partial_weight)) / 2.0
}

/// Share of `reference` terms present in `proposal` (exact 1.0, substring
/// `partial_weight`), divided by `|reference|`.
///
/// Answers "how much of this known approach is being repeated", so unlike
/// [`substring_overlap`] it is not diluted by extra proposal terms.
pub fn containment(
    reference: &BTreeSet<String>,
    proposal: &BTreeSet<String>,
    partial_weight: f64,
) -> f64 {
    if reference.is_empty() || proposal.is_empty() {
        return 0.0;
    }
    let accumulated: f64 = reference
        .iter()
        .map(|term| {
            if proposal.contains(term) {
                1.0
            } else if proposal
                .iter()
                .any(|p| p.contains(term.as_str()) || term.contains(p.as_str()))
            {
                partial_weight
            } else {
                0.0
            }
        })
        .sum();
    (accumulated / reference.len() as f64).clamp(0.0, 1.0)
}

/// `substring_weight * symmetricSubstringOverlap + jaccard_weight * Jaccard`,
/// normalised by the weight sum so identical sets always score 1.
#[derive(Debug, Clone)]
pub struct DedupBlend {
    substring_weight: f64,
    jaccard_weight: f64,
    partial_weight: f64,
}

impl DedupBlend {
    pub fn new(dedup: &DedupConfig, similarity: &SimilarityConfig) -> Self {
        Self {
            substring_weight: dedup.substring_weight,
            jaccard_weight: dedup.jaccard_weight,
            partial_weight: similarity.partial_match_weight,
        }
    }

    pub fn partial_weight(&self) -> f64 {
        self.partial_weight
    }

    /// Symmetric score in [0, 1]; 0 when either side is empty.
    pub fn score(&self, a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
        let total = self.substring_weight + self.jaccard_weight;
        if a.is_empty() || b.is_empty() || total <= 0.0 {
            return 0.0;
        }
        let blended = self.substring_weight
            * symmetric_substring_overlap(a, b, self.partial_weight)
            + self.jaccard_weight * jaccard(a, b);
        (blended / total).clamp(0.0, 1.0)
    }
}

impl Default for DedupBlend {
    fn default() -> Self {
        Self::new(&DedupConfig::default(), &SimilarityConfig::default())
    }
}
