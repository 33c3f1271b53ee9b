//! ExperienceEngine: one corpus, its index and every operation over it.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use hindsight_consolidation::{
    merge_into, ClusterEngine, ClusterInput, DedupMerger, FailureDetector, InsertProposal,
};
use hindsight_core::errors::{HindsightError, HindsightErrorCode, HindsightResult};
use hindsight_core::models::{Cluster, EngineStats, FailureCheck, RecordOutcome, SearchHit, Snapshot};
use hindsight_core::{Category, Entry, HindsightConfig, RecordRequest};
use hindsight_observability::tracing_setup::events;
use hindsight_observability::{MetricsCollector, QueryLog, QueryLogEntry};
use hindsight_retrieval::{QueryScorer, RetrievalIndex};
use hindsight_text::{DedupBlend, DocumentVector, FeatureExtractor, VectorSpace};

use crate::idf_policy::IdfScheduler;
use crate::snapshot;

/// The experience-reuse engine.
///
/// Owns the corpus. Mutating operations (including `find_solution`, which
/// bumps the top hit's usage count) take `&mut self`; wrap the engine in
/// [`crate::SharedEngine`] to share it across threads.
pub struct ExperienceEngine {
    config: HindsightConfig,
    index: RetrievalIndex,
    scorer: QueryScorer,
    merger: DedupMerger,
    failures: FailureDetector,
    clusterer: ClusterEngine,
    idf: IdfScheduler,
    /// Behind a mutex so read-only operations can still count themselves.
    metrics: Mutex<MetricsCollector>,
    query_log: QueryLog,
}

impl ExperienceEngine {
    /// Create an empty engine. Fails if the configuration does not validate.
    pub fn new(config: HindsightConfig) -> HindsightResult<Self> {
        config.validate()?;
        let extractor = FeatureExtractor::new(config.extraction.clone());
        let space = VectorSpace::new(&config.vectorizer);
        Ok(Self {
            index: RetrievalIndex::new(extractor, space),
            scorer: QueryScorer::new(&config.retrieval, &config.similarity),
            merger: DedupMerger::new(&config.dedup, &config.similarity),
            failures: FailureDetector::new(&config.failure, &config.dedup, &config.similarity),
            clusterer: ClusterEngine::new(&config.clustering),
            idf: IdfScheduler::new(config.vectorizer.idf_refresh),
            metrics: Mutex::new(MetricsCollector::new()),
            query_log: QueryLog::with_capacity(config.observability.query_log_capacity),
            config,
        })
    }

    /// Engine over an existing snapshot.
    pub fn from_snapshot(config: HindsightConfig, snapshot: Snapshot) -> HindsightResult<Self> {
        let mut engine = Self::new(config)?;
        engine.import_snapshot(snapshot)?;
        Ok(engine)
    }

    pub fn config(&self) -> &HindsightConfig {
        &self.config
    }

    /// Record an experience, merging it into a near-duplicate when one exists.
    pub fn record_entry(&mut self, request: RecordRequest) -> HindsightResult<RecordOutcome> {
        let span = hindsight_observability::record_span!(request.category);
        let _guard = span.enter();

        let record = request
            .validate()
            .inspect_err(|e| events::input_rejected("record_entry", e.error_code(), &e.to_string()))?;
        let features = self.index.extractor().extract_record(&record);
        let now = Utc::now();

        let outcome = match self.merger.propose_insert(&record, &features, self.index.entries()) {
            InsertProposal::Merge {
                target,
                similarity,
                exact,
            } => {
                let report = self.index.update(&target, |entry, extractor| {
                    merge_into(entry, &record, &features, extractor, now)
                })?;
                events::entry_merged(&target, similarity, exact, report.usage_count);
                self.with_metrics(|m| m.consolidation.record_merge(exact));
                RecordOutcome::merged(target, similarity)
            }
            InsertProposal::Insert => {
                let entry = Entry::new(&record, features.tags, features.terms, now);
                let id = entry.id.clone();
                self.index.add(entry)?;
                events::entry_recorded(&id, record.category.as_str());
                self.with_metrics(|m| m.consolidation.record_insert());
                RecordOutcome::inserted(id)
            }
        };

        if self.idf.note_change() {
            self.rebuild_idf("policy");
        }
        Ok(outcome)
    }

    /// Record a request given as a JSON object (`category`, `title`,
    /// `problem`, `solution`, `context`, `success_rate`).
    pub fn record_json(&mut self, value: &serde_json::Value) -> HindsightResult<RecordOutcome> {
        let request = RecordRequest::from_json(value)
            .inspect_err(|e| events::input_rejected("record_json", e.error_code(), &e.to_string()))?;
        self.record_entry(request)
    }

    /// Rank non-failure entries against `problem`.
    ///
    /// `min_score` defaults to `retrieval.default_min_score` and `top_k` to
    /// `retrieval.default_top_k`. The top hit's usage count is bumped.
    pub fn find_solution(
        &mut self,
        problem: &str,
        min_score: Option<f64>,
        top_k: Option<usize>,
    ) -> HindsightResult<Vec<SearchHit>> {
        let min_score = min_score.unwrap_or(self.config.retrieval.default_min_score);
        let top_k = top_k.unwrap_or(self.config.retrieval.default_top_k);
        let span = hindsight_observability::search_span!(top_k, min_score);
        let _guard = span.enter();

        if !min_score.is_finite() || !(0.0..=1.0).contains(&min_score) {
            let err = HindsightError::invalid_input("min_score", "must be between 0.0 and 1.0");
            events::input_rejected("find_solution", err.error_code(), &err.to_string());
            return Err(err);
        }

        let started = Instant::now();
        let query = self.index.extractor().extract(problem);
        let hits = self
            .index
            .search(&query, top_k, min_score, &self.scorer, Utc::now());
        let latency = started.elapsed();

        let top = hits.first().map(|h| (h.entry.id.as_str(), h.score));
        events::search_completed(query.terms.len(), hits.len(), top.map(|(_, s)| s));
        self.with_metrics(|m| m.retrieval.record_query(hits.len(), top));
        self.query_log.record(QueryLogEntry::new(
            problem,
            latency,
            hits.len(),
            top.map(|(_, s)| s),
        ));
        Ok(hits)
    }

    /// Has an approach like `solution` already failed in a similar context?
    ///
    /// `threshold` defaults to `failure.threshold`.
    pub fn check_prior_failure(
        &self,
        solution: &str,
        context: &str,
        threshold: Option<f64>,
    ) -> HindsightResult<FailureCheck> {
        let threshold = threshold.unwrap_or(self.config.failure.threshold);
        let span = hindsight_observability::failure_check_span!(threshold);
        let _guard = span.enter();

        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            let err = HindsightError::invalid_input("threshold", "must be between 0.0 and 1.0");
            events::input_rejected("check_prior_failure", err.error_code(), &err.to_string());
            return Err(err);
        }

        let check = self.failures.check(
            self.index.extractor(),
            solution,
            context,
            threshold,
            self.index.entries(),
        );
        if let (Some(failure), Some(similarity)) = (&check.matched_failure, check.similarity) {
            events::failure_matched(&failure.id, similarity);
        }
        self.with_metrics(|m| m.consolidation.record_failure_check(check.is_failed));
        Ok(check)
    }

    /// Partition every entry into at most `k` clusters by cosine k-means.
    pub fn cluster(&mut self, k: usize) -> HindsightResult<Vec<Cluster>> {
        let span = hindsight_observability::cluster_span!(k, self.index.len());
        let _guard = span.enter();

        if k == 0 {
            let err = HindsightError::invalid_input("k", "must be at least 1");
            events::input_rejected("cluster", err.error_code(), &err.to_string());
            return Err(err);
        }

        let rebuilt = self.index.refresh_vectors();
        debug!(rebuilt, "vectors refreshed for clustering");

        let empty = DocumentVector::default();
        let inputs: Vec<ClusterInput<'_>> = self
            .index
            .entries()
            .map(|entry| ClusterInput {
                id: &entry.id,
                vector: self.index.vector(&entry.id).unwrap_or(&empty),
                keywords: &entry.keywords,
            })
            .collect();
        let clusters = self.clusterer.cluster(&inputs, k)?;

        events::clustering_completed(k, clusters.len(), inputs.len());
        self.with_metrics(|m| m.consolidation.record_clustering());
        Ok(clusters)
    }

    /// Rebuild the IDF table now, whatever the refresh policy.
    pub fn recompute_idf(&mut self) {
        self.rebuild_idf("manual");
    }

    fn rebuild_idf(&mut self, reason: &str) {
        self.index.recompute_idf();
        self.idf.reset();
        let space = self.index.space();
        events::idf_recomputed(space.idf().corpus_size(), space.vocabulary().len(), reason);
        self.with_metrics(|m| m.consolidation.record_idf_recompute());
    }

    /// Capture the corpus, vocabulary and IDF table.
    pub fn export_snapshot(&self) -> Snapshot {
        let span = hindsight_observability::snapshot_span!("export");
        let _guard = span.enter();
        let snapshot = snapshot::build(&self.index);
        events::snapshot_exported(snapshot.entries.len(), snapshot.vocabulary.len());
        snapshot
    }

    pub fn export_snapshot_json(&self) -> HindsightResult<String> {
        self.export_snapshot().to_json()
    }

    /// Replace the corpus with `snapshot`. On error the engine is unchanged.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> HindsightResult<()> {
        let span = hindsight_observability::snapshot_span!("import");
        let _guard = span.enter();

        let index = snapshot::restore(&self.config, snapshot)
            .inspect_err(|e| events::input_rejected("import_snapshot", e.error_code(), &e.to_string()))?;
        self.index = index;
        self.idf.reset();

        let space = self.index.space();
        events::snapshot_imported(self.index.len(), space.vocabulary().len());
        Ok(())
    }

    pub fn import_snapshot_json(&mut self, json: &str) -> HindsightResult<()> {
        self.import_snapshot(Snapshot::from_json(json)?)
    }

    pub fn get_entry(&self, id: &str) -> Option<&Entry> {
        self.index.get(id)
    }

    /// All entries, failures included, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.index.entries()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Dedup similarity between two free texts, in [0, 1].
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let extractor = self.index.extractor();
        let blend = DedupBlend::new(&self.config.dedup, &self.config.similarity);
        blend.score(&extractor.extract(a).term_set(), &extractor.extract(b).term_set())
    }

    pub fn stats(&self) -> EngineStats {
        let mut entries_by_category: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for entry in self.index.entries() {
            *entries_by_category.entry(entry.category).or_insert(0) += 1;
        }
        let space = self.index.space();
        EngineStats {
            total_entries: self.index.len(),
            entries_by_category,
            vocabulary_size: space.vocabulary().len(),
            idf_corpus_size: space.idf().corpus_size(),
            pending_idf_updates: self.idf.pending(),
            cached_vectors: self.index.fresh_vectors(),
        }
    }

    /// Copy of the current counters.
    pub fn metrics(&self) -> MetricsCollector {
        match self.metrics.lock() {
            Ok(m) => m.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn reset_metrics(&self) {
        self.with_metrics(MetricsCollector::reset);
    }

    pub fn query_log(&self) -> &QueryLog {
        &self.query_log
    }

    fn with_metrics(&self, f: impl FnOnce(&mut MetricsCollector)) {
        match self.metrics.lock() {
            Ok(mut metrics) => f(&mut metrics),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl std::fmt::Debug for ExperienceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExperienceEngine")
            .field("entries", &self.index.len())
            .field("vocabulary", &self.index.space().vocabulary().len())
            .field("pending_idf_updates", &self.idf.pending())
            .finish()
    }
}
