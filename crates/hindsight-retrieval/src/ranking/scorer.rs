//! Multi-signal relevance scorer.
//!
//! Signals: keyword overlap, tag overlap, title overlap and (optionally) TF-IDF
//! cosine. All overlaps are directional, query → candidate.

use std::collections::BTreeSet;

use hindsight_core::config::{RetrievalConfig, SearchWeights, SimilarityConfig};
use hindsight_core::models::ScoreBreakdown;
use hindsight_core::Entry;
use hindsight_text::similarity::substring_overlap;
use hindsight_text::{synonyms, Features};

/// Query features after optional synonym expansion.
#[derive(Debug, Clone, Default)]
pub struct PreparedQuery {
    pub terms: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

impl PreparedQuery {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.tags.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct QueryScorer {
    weights: SearchWeights,
    partial_weight: f64,
    expand: bool,
}

impl QueryScorer {
    pub fn new(retrieval: &RetrievalConfig, similarity: &SimilarityConfig) -> Self {
        Self {
            weights: retrieval.weights.clone(),
            partial_weight: similarity.partial_match_weight,
            expand: retrieval.query_expansion,
        }
    }

    pub fn weights(&self) -> &SearchWeights {
        &self.weights
    }

    /// Cosine is only computed (and query vectors only built) when it carries weight.
    pub fn uses_cosine(&self) -> bool {
        self.weights.cosine > 0.0
    }

    pub fn prepare(&self, query: &Features) -> PreparedQuery {
        let terms = query.term_set();
        PreparedQuery {
            terms: if self.expand {
                synonyms::expand(&terms)
            } else {
                terms
            },
            tags: query.tags.clone(),
        }
    }

    pub fn breakdown(
        &self,
        query: &PreparedQuery,
        entry: &Entry,
        title_terms: &BTreeSet<String>,
        cosine: f64,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            keyword: substring_overlap(&query.terms, &entry.keyword_terms(), self.partial_weight),
            tag: substring_overlap(&query.tags, &entry.tags, self.partial_weight),
            title: substring_overlap(&query.terms, title_terms, self.partial_weight),
            cosine,
        }
    }

    /// Weighted sum divided by the weight total, so the score stays in [0, 1]
    /// whatever the cosine weight.
    pub fn blend(&self, breakdown: &ScoreBreakdown) -> f64 {
        let total = self.weights.total();
        if total <= 0.0 {
            return 0.0;
        }
        let sum = self.weights.keyword * breakdown.keyword
            + self.weights.tag * breakdown.tag
            + self.weights.title * breakdown.title
            + self.weights.cosine * breakdown.cosine;
        (sum / total).clamp(0.0, 1.0)
    }
}

impl Default for QueryScorer {
    fn default() -> Self {
        Self::new(&RetrievalConfig::default(), &SimilarityConfig::default())
    }
}
