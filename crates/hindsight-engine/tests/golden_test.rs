//! Golden corpora from test-fixtures replayed through the engine.

use std::collections::HashMap;

use hindsight_core::HindsightConfig;
use hindsight_engine::ExperienceEngine;
use serde_json::Value;
use test_fixtures::load_fixture_value;

/// Record every fixture record in order; returns key → stored entry id.
fn seed(engine: &mut ExperienceEngine, fixture: &Value) -> HashMap<String, String> {
    let mut ids = HashMap::new();
    for record in fixture["input"]["records"].as_array().unwrap() {
        let key = record["key"].as_str().unwrap().to_string();
        let outcome = engine.record_json(record).unwrap();
        match record["merge_into"].as_str() {
            Some(target) => {
                assert!(outcome.merged, "{key} should merge into {target}");
                assert_eq!(Some(&outcome.id), ids.get(target), "{key} merged into the wrong entry");
            }
            None => assert!(!outcome.merged, "{key} should be a new entry"),
        }
        ids.insert(key, outcome.id);
    }
    ids
}

fn engine() -> ExperienceEngine {
    ExperienceEngine::new(HindsightConfig::default()).unwrap()
}

#[test]
fn golden_ranked_corpus() {
    let fixture = load_fixture_value("golden/retrieval/ranked_corpus.json");
    let mut e = engine();
    let ids = seed(&mut e, &fixture);

    let queries = fixture["input"]["queries"].as_array().unwrap();
    let expected = fixture["expected_output"]["top_keys"].as_array().unwrap();
    let hidden: Vec<&String> = fixture["expected_output"]["never_returned"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| &ids[k.as_str().unwrap()])
        .collect();

    for (query, want) in queries.iter().zip(expected) {
        let text = query["query"].as_str().unwrap();
        let min_score = query["min_score"].as_f64().unwrap();
        let hits = e.find_solution(text, Some(min_score), None).unwrap();

        match want.as_str() {
            Some(key) => {
                assert!(!hits.is_empty(), "no hits for {text:?}");
                assert_eq!(hits[0].entry.id, ids[key], "wrong top hit for {text:?}");
            }
            None => assert!(hits.is_empty(), "unexpected hits for {text:?}"),
        }
        assert!(hits.iter().all(|h| !hidden.contains(&&h.entry.id)));
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn golden_dedup_sequence() {
    let fixture = load_fixture_value("golden/consolidation/dedup_sequence.json");
    let mut e = engine();
    let ids = seed(&mut e, &fixture);
    let expected = &fixture["expected_output"];

    assert_eq!(e.len() as u64, expected["total_entries"].as_u64().unwrap());
    for (key, usage) in expected["usage_counts"].as_object().unwrap() {
        let entry = e.get_entry(&ids[key]).unwrap();
        assert_eq!(entry.usage_count, usage.as_u64().unwrap(), "usage of {key}");
    }
    let metrics = e.metrics();
    assert_eq!(metrics.consolidation.merges, 3);
    assert_eq!(metrics.consolidation.exact_merges, 1);
}

#[test]
fn golden_prior_failures() {
    let fixture = load_fixture_value("golden/failure/prior_failures.json");
    let mut e = engine();
    let ids = seed(&mut e, &fixture);
    let min_similarity = fixture["expected_output"]["min_similarity"].as_f64().unwrap();

    for check in fixture["input"]["checks"].as_array().unwrap() {
        let solution = check["solution"].as_str().unwrap();
        let context = check["context"].as_str().unwrap();
        let result = e.check_prior_failure(solution, context, None).unwrap();

        assert_eq!(result.is_failed, check["is_failed"].as_bool().unwrap(), "{solution:?} / {context:?}");
        match check["matched"].as_str() {
            Some(key) => {
                assert_eq!(result.matched_failure.unwrap().id, ids[key]);
                assert!(result.similarity.unwrap() > min_similarity);
            }
            None => assert!(result.matched_failure.is_none()),
        }
    }
}
