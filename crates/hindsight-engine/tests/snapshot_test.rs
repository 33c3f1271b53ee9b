//! Snapshot export/import through the engine.

use hindsight_core::errors::SnapshotError;
use hindsight_core::models::Snapshot;
use hindsight_core::{Category, HindsightConfig, HindsightError, RecordRequest};
use hindsight_engine::ExperienceEngine;

fn populated() -> ExperienceEngine {
    let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
    e.record_entry(RecordRequest::new(
        Category::Bugfix,
        "PM2 startup failure",
        "PM2 cannot start, module type error",
        "rename to .cjs, use CommonJS",
        "",
    ))
    .unwrap();
    e.record_entry(
        RecordRequest::new(
            Category::Tool,
            "docker prune",
            "disk full of images",
            "docker system prune",
            "",
        )
        .with_success_rate(80.0),
    )
    .unwrap();
    e.record_entry(RecordRequest::new(
        Category::Failure,
        "Clicks miss on other machines",
        "Automation clicks land in the wrong place",
        "hardcode screen resolution 1920x1080",
        "desktop GUI automation",
    ))
    .unwrap();
    e.recompute_idf();
    e
}

#[test]
fn round_trip_preserves_corpus_and_behaviour() {
    let mut original = populated();
    let json = original.export_snapshot_json().unwrap();

    let mut restored = ExperienceEngine::new(HindsightConfig::default()).unwrap();
    restored.import_snapshot_json(&json).unwrap();

    let a: Vec<_> = original.entries().map(|e| (e.id.clone(), e.usage_count)).collect();
    let b: Vec<_> = restored.entries().map(|e| (e.id.clone(), e.usage_count)).collect();
    assert_eq!(a, b);

    let sa = original.stats();
    let sb = restored.stats();
    assert_eq!(sa.vocabulary_size, sb.vocabulary_size);
    assert_eq!(sa.idf_corpus_size, sb.idf_corpus_size);

    let ha = original.find_solution("pm2 module error", Some(0.0), None).unwrap();
    let hb = restored.find_solution("pm2 module error", Some(0.0), None).unwrap();
    assert_eq!(ha[0].entry.id, hb[0].entry.id);
    assert!((ha[0].score - hb[0].score).abs() < 1e-12);

    let check = restored
        .check_prior_failure("use fixed resolution 1920x1080 for clicks", "desktop GUI automation", None)
        .unwrap();
    assert!(check.is_failed);
}

#[test]
fn exported_vocabulary_is_in_index_order() {
    let e = populated();
    let snapshot = e.export_snapshot();
    assert_eq!(snapshot.entries.len(), 3);
    assert_eq!(snapshot.vocabulary.len(), e.stats().vocabulary_size);
    assert_eq!(snapshot.idf.corpus_size, 3);
}

#[test]
fn unsupported_version_is_rejected_and_engine_is_untouched() {
    let source = populated();
    let mut snapshot = source.export_snapshot();
    snapshot.version += 1;

    let mut target = populated();
    let before = target.len();
    let err = target.import_snapshot(snapshot).unwrap_err();
    assert!(matches!(
        err,
        HindsightError::Snapshot(SnapshotError::UnsupportedVersion { .. })
    ));
    assert_eq!(target.len(), before);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut snapshot = populated().export_snapshot();
    let copy = snapshot.entries[0].clone();
    snapshot.entries.push(copy);

    let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
    let err = e.import_snapshot(snapshot).unwrap_err();
    assert!(matches!(
        err,
        HindsightError::Snapshot(SnapshotError::DuplicateEntryId { .. })
    ));
    assert!(e.is_empty());
}

#[test]
fn malformed_success_rate_is_invalid_input() {
    let mut snapshot = populated().export_snapshot();
    snapshot.entries[1].success_rate = Some(250.0);
    let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
    assert!(matches!(
        e.import_snapshot(snapshot),
        Err(HindsightError::InvalidInput { .. })
    ));
}

#[test]
fn garbage_json_is_a_serialization_error() {
    let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
    assert!(matches!(
        e.import_snapshot_json("{not json"),
        Err(HindsightError::Serialization(_))
    ));
}

#[test]
fn importing_an_empty_snapshot_clears_the_engine() {
    let mut e = populated();
    e.import_snapshot(Snapshot::new(Vec::new(), Vec::new(), Default::default()))
        .unwrap();
    assert!(e.is_empty());
    assert!(e.find_solution("pm2", Some(0.0), None).unwrap().is_empty());
}

#[test]
fn engine_can_start_from_a_snapshot() {
    let snapshot = populated().export_snapshot();
    let e = ExperienceEngine::from_snapshot(HindsightConfig::default(), snapshot).unwrap();
    assert_eq!(e.len(), 3);
}

#[test]
fn edited_snapshot_text_is_reindexed_on_import() {
    let mut snapshot = populated().export_snapshot();
    let docker = snapshot
        .entries
        .iter_mut()
        .find(|e| e.title == "docker prune")
        .unwrap();
    docker.solution = "kubectl rollout restart deployment".into();
    let id = docker.id.clone();

    let mut e = ExperienceEngine::new(HindsightConfig::default()).unwrap();
    e.import_snapshot(snapshot).unwrap();

    let entry = e.get_entry(&id).unwrap();
    assert!(entry.keywords.contains_key("kubectl"));
    assert!(!entry.keywords.contains_key("system"));
    let hits = e.find_solution("kubectl rollout restart", Some(0.0), None).unwrap();
    assert_eq!(hits[0].entry.id, id);
}

#[test]
fn merged_entries_round_trip_with_their_features() {
    let mut original = populated();
    original
        .record_entry(RecordRequest::new(
            Category::Bugfix,
            "PM2 startup failure",
            "PM2 fails to start: module type error",
            "set type commonjs in package.json",
            "",
        ))
        .unwrap();
    let snapshot = original.export_snapshot();
    let restored = ExperienceEngine::from_snapshot(HindsightConfig::default(), snapshot).unwrap();

    for entry in original.entries() {
        let copy = restored.get_entry(&entry.id).unwrap();
        assert_eq!(copy.keywords, entry.keywords);
        assert_eq!(copy.tags, entry.tags);
        assert_eq!(copy.content_hash, entry.content_hash);
    }
}
