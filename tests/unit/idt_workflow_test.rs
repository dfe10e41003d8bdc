//! Integration tests for IDT scoring against the SQLite store.

use chrono::{Duration, TimeZone, Utc};
use rowlog::idt::{best_record, ErgoTime, IdtEngine, IdtError};
use rowlog::profile::{Gender, Profile, ProfileAttribute, ProfileStore};
use rowlog::storage::{keys, KeyValueStore, SqliteStore};
use std::collections::HashSet;
use tempfile::TempDir;

fn open(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(&dir.path().join("rowlog.db")).unwrap()
}

fn save_profile(store: &SqliteStore, weight: &str, gender: Gender) {
    ProfileStore::new(store)
        .save(&Profile::new("Rower").with_weight(weight).with_gender(gender))
        .unwrap();
}

fn time(s: &str) -> ErgoTime {
    s.parse().unwrap()
}

#[test]
fn test_male_and_female_scenarios() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    let engine = IdtEngine::new(&store);

    save_profile(&store, "70", Gender::Male);
    let male = engine.record_score(time("8:00.0")).unwrap();
    assert_eq!(male.record.score_display(), "75.26");
    assert!(male.new_high_score);

    save_profile(&store, "55", Gender::Female);
    let female = engine.record_score(time("7:30.0")).unwrap();
    assert_eq!(female.record.score_display(), "93.51");
    assert_eq!(female.record.weight, "55");
    assert!(female.new_high_score);

    let high = engine.load_high_score().unwrap().unwrap();
    assert_eq!(high.score, female.record.idt_score);
    assert_eq!(high.ergo_time_display, "7:30.0");
}

#[test]
fn test_history_survives_reopen_as_a_set() {
    let dir = TempDir::new().unwrap();
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    let mut ids = HashSet::new();
    {
        let store = open(&dir);
        save_profile(&store, "72.5", Gender::Male);
        let engine = IdtEngine::new(&store);
        for (i, t) in ["7:10.0", "6:58.4", "7:02.9"].iter().enumerate() {
            let outcome = engine
                .record_score_at(time(t), start + Duration::days(i as i64))
                .unwrap();
            ids.insert(outcome.record.id);
        }
    }

    let store = open(&dir);
    let history = IdtEngine::new(&store).load_history().unwrap();
    let reloaded: HashSet<String> = history.iter().map(|r| r.id.clone()).collect();
    assert_eq!(reloaded, ids);

    // Newest first
    assert_eq!(history[0].ergo_time_display, "7:02.9");
    assert_eq!(best_record(&history).display(), "6:58.4");
}

#[test]
fn test_deleting_record_holder_keeps_high_score() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    save_profile(&store, "80", Gender::Male);
    let engine = IdtEngine::new(&store);
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    let best = engine.record_score_at(time("6:40.0"), start).unwrap();
    let slower = engine
        .record_score_at(time("7:00.0"), start + Duration::hours(1))
        .unwrap();
    assert!(!slower.new_high_score);

    assert!(engine.delete_record(&best.record.id).unwrap());

    let history = engine.load_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(best_record(&history).display(), "7:00.0");

    let high = engine.load_high_score().unwrap().unwrap();
    assert_eq!(high.score, best.record.idt_score);
    assert_eq!(high.ergo_time_display, "6:40.0");

    // A score between the two does not beat the retained high score
    let middle = engine
        .record_score_at(time("6:50.0"), start + Duration::hours(2))
        .unwrap();
    assert!(!middle.new_high_score);
    assert_eq!(engine.load_high_score().unwrap().unwrap().score, best.record.idt_score);
}

#[test]
fn test_missing_profile_leaves_storage_untouched() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    let engine = IdtEngine::new(&store);

    let result = engine.record_score(time("7:00.0"));
    assert!(matches!(
        result,
        Err(IdtError::MissingProfileAttribute(ProfileAttribute::Weight))
    ));

    ProfileStore::new(&store)
        .save(&Profile::new("Rower").with_weight("70"))
        .unwrap();
    let result = engine.record_score(time("7:00.0"));
    assert!(matches!(
        result,
        Err(IdtError::MissingProfileAttribute(ProfileAttribute::Gender))
    ));

    assert!(store.get(keys::IDT_HISTORY).unwrap().is_none());
    assert!(store.get(keys::IDT_HIGH_SCORE).unwrap().is_none());
}

#[test]
fn test_invalid_time_entry_is_rejected_before_scoring() {
    for entry in ["0:00.0", "7:60.0", "7:05.12", "seven", ""] {
        assert!(
            matches!(entry.parse::<ErgoTime>(), Err(IdtError::InvalidTimeInput(_))),
            "accepted {entry:?}"
        );
    }
    assert!(ErgoTime::new(7, 5, 10).is_err());
}
