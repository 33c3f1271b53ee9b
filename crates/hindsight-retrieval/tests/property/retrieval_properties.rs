//! Property tests for retrieval ranking: bounded scores, ordering, top_k and
//! failure exclusion.

use chrono::Utc;
use proptest::prelude::*;

use hindsight_core::config::VectorizerConfig;
use hindsight_core::{Category, Entry, RecordRequest};
use hindsight_retrieval::{QueryScorer, RetrievalIndex};
use hindsight_text::{FeatureExtractor, VectorSpace};

const WORDS: &[&str] = &[
    "docker", "pm2", "screenshot", "gui", "timeout", "nginx", "redis", "module", "startup",
    "resolution", "click", "cache", "deploy", "permission", "encoding",
];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|w| w.join(" "))
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn build(docs: &[(Category, String)]) -> RetrievalIndex {
    let extractor = FeatureExtractor::default();
    let mut idx = RetrievalIndex::new(
        extractor.clone(),
        VectorSpace::new(&VectorizerConfig::default()),
    );
    for (category, text) in docs {
        let record = RecordRequest::new(*category, text.as_str(), text.as_str(), "apply fix", "")
            .validate()
            .unwrap();
        let features = extractor.extract_record(&record);
        idx.add(Entry::new(&record, features.tags, features.terms, Utc::now()))
            .unwrap();
    }
    idx
}

proptest! {
    #[test]
    fn prop_search_is_bounded_sorted_and_truncated(
        docs in prop::collection::vec((category(), phrase()), 0..12),
        query in phrase(),
        top_k in 1usize..6,
        min_score in 0.0f64..0.6,
    ) {
        let mut idx = build(&docs);
        let features = FeatureExtractor::default().extract(&query);
        let hits = idx.search(&features, top_k, min_score, &QueryScorer::default(), Utc::now());

        prop_assert!(hits.len() <= top_k);
        for hit in &hits {
            prop_assert!((0.0..=1.0).contains(&hit.score));
            prop_assert!(hit.score >= min_score);
            prop_assert!(!hit.entry.is_failure());
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}

proptest! {
    #[test]
    fn prop_search_changes_at_most_one_usage_count(
        docs in prop::collection::vec((category(), phrase()), 1..10),
        query in phrase(),
    ) {
        let mut idx = build(&docs);
        let before: u64 = idx.entries().map(|e| e.usage_count).sum();
        let features = FeatureExtractor::default().extract(&query);
        let hits = idx.search(&features, 10, 0.0, &QueryScorer::default(), Utc::now());
        let after: u64 = idx.entries().map(|e| e.usage_count).sum();
        prop_assert_eq!(after - before, if hits.is_empty() { 0 } else { 1 });
    }
}
