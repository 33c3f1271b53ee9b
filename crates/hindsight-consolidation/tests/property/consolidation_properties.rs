//! Property tests for hindsight-consolidation: cluster coverage and cluster
//! count bounds, dedup self-match, failure similarity bounds.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use proptest::prelude::*;

use hindsight_consolidation::{ClusterEngine, ClusterInput, DedupMerger, FailureDetector};
use hindsight_core::{Category, Entry, RecordRequest};
use hindsight_text::{DocumentVector, FeatureExtractor};

const WORDS: &[&str] = &[
    "docker", "pm2", "screenshot", "gui", "timeout", "nginx", "redis", "module", "startup",
    "hardcode", "resolution", "click", "cache", "deploy", "fixed", "static",
];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..7).prop_map(|w| w.join(" "))
}

fn vectors() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6).prop_flat_map(|dim| {
        prop::collection::vec(prop::collection::vec(0.0f64..1.0, dim), 0..25)
    })
}

proptest! {
    #[test]
    fn prop_cluster_covers_every_entry_once(vs in vectors(), k in 1usize..8, seed in any::<u64>()) {
        let docs: Vec<DocumentVector> = vs.into_iter().map(DocumentVector::from_weights).collect();
        let keywords: BTreeMap<String, u32> = BTreeMap::new();
        let ids: Vec<String> = (0..docs.len()).map(|i| format!("e{i}")).collect();
        let items: Vec<ClusterInput<'_>> = docs
            .iter()
            .zip(&ids)
            .map(|(vector, id)| ClusterInput { id: id.as_str(), vector, keywords: &keywords })
            .collect();

        let engine = ClusterEngine::new(&hindsight_core::config::ClusteringConfig {
            seed,
            ..Default::default()
        });
        let clusters = engine.cluster(&items, k).unwrap();

        prop_assert!(clusters.len() <= k.min(items.len()));
        let mut seen = BTreeSet::new();
        let mut total = 0;
        for (i, cluster) in clusters.iter().enumerate() {
            prop_assert_eq!(cluster.cluster_id, i);
            prop_assert!(!cluster.entry_ids.is_empty());
            total += cluster.entry_ids.len();
            seen.extend(cluster.entry_ids.iter().cloned());
        }
        prop_assert_eq!(total, items.len());
        prop_assert_eq!(seen.len(), items.len());
    }
}

proptest! {
    #[test]
    fn prop_record_merges_into_its_own_copy(problem in phrase(), solution in phrase()) {
        let extractor = FeatureExtractor::default();
        let record = RecordRequest::new(Category::Tool, "", problem.as_str(), solution.as_str(), "")
            .validate()
            .unwrap();
        let f = extractor.extract_record(&record);
        let stored = Entry::new(&record, f.tags.clone(), f.terms.clone(), Utc::now());
        prop_assert!(DedupMerger::default().propose_insert(&record, &f, [&stored]).is_merge());
    }
}

proptest! {
    #[test]
    fn prop_failure_similarity_bounded(a in phrase(), b in phrase()) {
        let extractor = FeatureExtractor::default();
        let detector = FailureDetector::default();
        let s = detector.similarity(
            &extractor.extract(&a).term_set(),
            &extractor.extract(&b).term_set(),
        );
        prop_assert!((0.0..=1.0).contains(&s));
    }
}
