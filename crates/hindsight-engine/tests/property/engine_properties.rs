//! Property tests for the engine: corpus invariants under arbitrary record
//! sequences, search bounds, snapshot round trips.

use std::collections::BTreeSet;

use proptest::prelude::*;

use hindsight_core::{Category, HindsightConfig, RecordRequest};
use hindsight_engine::ExperienceEngine;

const WORDS: &[&str] = &[
    "docker", "pm2", "screenshot", "gui", "timeout", "nginx", "redis", "module", "startup",
    "hardcode", "resolution", "click", "cache", "deploy", "config", "build", "retry", "proxy",
];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..6).prop_map(|w| w.join(" "))
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn request() -> impl Strategy<Value = RecordRequest> {
    (category(), phrase(), phrase(), phrase())
        .prop_map(|(c, title, problem, solution)| RecordRequest::new(c, title, problem, solution, ""))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_corpus_invariants_hold(requests in prop::collection::vec(request(), 0..20)) {
        let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
        let mut vocabulary = 0;
        let mut recorded = 0u64;
        for req in requests {
            e.record_entry(req).unwrap();
            recorded += 1;
            let size = e.stats().vocabulary_size;
            prop_assert!(size >= vocabulary);
            vocabulary = size;
        }

        let ids: BTreeSet<&str> = e.entries().map(|x| x.id.as_str()).collect();
        prop_assert_eq!(ids.len(), e.len());
        // Every record either created an entry or bumped one.
        let usage: u64 = e.entries().map(|x| x.usage_count).sum();
        prop_assert_eq!(usage, recorded);
        for entry in e.entries() {
            prop_assert!(entry.success_rate.map_or(true, |r| (0.0..=100.0).contains(&r)));
            prop_assert_eq!(entry.success_rate.is_none(), entry.is_failure());
        }
    }

    #[test]
    fn prop_search_results_are_bounded_and_sorted(
        requests in prop::collection::vec(request(), 1..15),
        query in phrase(),
        top_k in 1usize..6,
        min_score in 0.0f64..1.0,
    ) {
        let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
        for req in requests {
            e.record_entry(req).unwrap();
        }
        let hits = e.find_solution(&query, Some(min_score), Some(top_k)).unwrap();
        prop_assert!(hits.len() <= top_k);
        for hit in &hits {
            prop_assert!(hit.score >= min_score && hit.score <= 1.0);
            prop_assert!(!hit.entry.is_failure());
        }
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn prop_snapshot_round_trip_keeps_entries(requests in prop::collection::vec(request(), 0..12)) {
        let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
        for req in requests {
            e.record_entry(req).unwrap();
        }
        let json = e.export_snapshot_json().unwrap();
        let mut restored = ExperienceEngine::new(HindsightConfig::default()).unwrap();
        restored.import_snapshot_json(&json).unwrap();

        let a: Vec<_> = e.entries().map(|x| (&x.id, &x.keywords, x.usage_count)).collect();
        let b: Vec<_> = restored.entries().map(|x| (&x.id, &x.keywords, x.usage_count)).collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(e.stats().vocabulary_size, restored.stats().vocabulary_size);
    }

    #[test]
    fn prop_cluster_partitions_the_corpus(requests in prop::collection::vec(request(), 0..15), k in 1usize..6) {
        let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
        for req in requests {
            e.record_entry(req).unwrap();
        }
        let clusters = e.cluster(k).unwrap();
        prop_assert!(clusters.len() <= k.min(e.len()));
        let mut seen = BTreeSet::new();
        for cluster in &clusters {
            for id in &cluster.entry_ids {
                prop_assert!(seen.insert(id.clone()), "{} assigned twice", id);
            }
        }
        prop_assert_eq!(seen.len(), e.len());
    }
}
