//! Prior-failure detection: is a proposed solution a repeat of an approach
//! already recorded as failed?

use std::collections::BTreeSet;

use tracing::debug;

use hindsight_core::config::{DedupConfig, FailureConfig, SimilarityConfig};
use hindsight_core::models::FailureCheck;
use hindsight_core::Entry;
use hindsight_text::similarity::containment;
use hindsight_text::{synonyms, DedupBlend, FeatureExtractor};

#[derive(Debug, Clone)]
pub struct FailureDetector {
    blend: DedupBlend,
    context_threshold: f64,
    require_context_match: bool,
}

impl FailureDetector {
    pub fn new(failure: &FailureConfig, dedup: &DedupConfig, similarity: &SimilarityConfig) -> Self {
        Self {
            blend: DedupBlend::new(dedup, similarity),
            context_threshold: failure.context_threshold,
            require_context_match: failure.require_context_match,
        }
    }

    /// Similarity of a proposal to a failed solution.
    ///
    /// The larger of the symmetric dedup blend and the containment of the
    /// failed solution's terms in the synonym-expanded proposal. Containment
    /// catches rephrasings that add detail ("use fixed resolution 1920x1080
    /// for clicks" still repeats "hardcode screen resolution 1920x1080").
    pub fn similarity(&self, proposal: &BTreeSet<String>, failed: &BTreeSet<String>) -> f64 {
        if proposal.is_empty() || failed.is_empty() {
            return 0.0;
        }
        let blended = self.blend.score(proposal, failed);
        let contained = containment(failed, &synonyms::expand(proposal), self.blend.partial_weight());
        blended.max(contained)
    }

    /// Score the proposal against each solution segment of a failure (the
    /// original text and every merged delta) and keep the best.
    fn best_segment_similarity(
        &self,
        extractor: &FeatureExtractor,
        proposal: &BTreeSet<String>,
        failure: &Entry,
    ) -> f64 {
        failure
            .solution_segments()
            .iter()
            .map(|segment| self.similarity(proposal, &extractor.extract(segment).term_set()))
            .fold(0.0, f64::max)
    }

    /// Context gate. Applies only when enabled and both sides have context terms.
    pub fn context_matches(&self, proposal: &BTreeSet<String>, failed: &BTreeSet<String>) -> bool {
        if !self.require_context_match || proposal.is_empty() || failed.is_empty() {
            return true;
        }
        self.blend.score(proposal, failed) > self.context_threshold
    }

    /// Check `solution` against every failure entry. The best match strictly
    /// above `threshold` that also passes the context gate is reported.
    pub fn check<'a, I>(
        &self,
        extractor: &FeatureExtractor,
        solution: &str,
        context: &str,
        threshold: f64,
        entries: I,
    ) -> FailureCheck
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let proposal = extractor.extract(solution).term_set();
        if proposal.is_empty() {
            return FailureCheck::clear();
        }
        let proposal_context = extractor.extract(context).term_set();

        let mut best: Option<(&Entry, f64)> = None;
        for failure in entries.into_iter().filter(|e| e.is_failure()) {
            let score = self.best_segment_similarity(extractor, &proposal, failure);
            if score <= threshold || best.is_some_and(|(_, s)| score <= s) {
                continue;
            }
            let failed_context = extractor.extract(&failure.context).term_set();
            if !self.context_matches(&proposal_context, &failed_context) {
                debug!(failure_id = %failure.id, similarity = score, "context mismatch");
                continue;
            }
            best = Some((failure, score));
        }

        match best {
            Some((failure, score)) => FailureCheck::matched(failure.clone(), score),
            None => FailureCheck::clear(),
        }
    }
}

impl Default for FailureDetector {
    fn default() -> Self {
        Self::new(
            &FailureConfig::default(),
            &DedupConfig::default(),
            &SimilarityConfig::default(),
        )
    }
}
