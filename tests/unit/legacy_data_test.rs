//! Loading documents written by earlier app versions.

use rowlog::idt::{best_record, IdtEngine, IdtError};
use rowlog::profile::{Gender, ProfileStore};
use rowlog::storage::{keys, KeyValueStore, MemoryStore, StorageError};
use rowlog::training::{total_distance, Category, TrainingError, TrainingLog};

#[test]
fn test_legacy_documents_load() {
    let kv = MemoryStore::new();
    kv.set(
        keys::PROFILE,
        r#"{"name":"Sora","affiliation":"Boat Club","iconUri":null,"weight":"68","gender":"男子"}"#,
    )
    .unwrap();
    kv.set(
        keys::IDT_HISTORY,
        r#"[
            {"id":"1718000000000","idtScore":75.25,"ergoTimeSeconds":480,"ergoTimeString":"8:00.0","weight":"70","date":"2024-06-10T06:13:20.000Z"},
            {"id":"1718100000000","idtScore":78.1,"ergoTimeSeconds":462.5,"ergoTimeString":"7:42.5","weight":68,"date":"2024-06-11T10:00:00.000Z"}
        ]"#,
    )
    .unwrap();
    kv.set(keys::IDT_HIGH_SCORE, r#"{"score":78.1,"time":"7:42.5","weight":"68"}"#)
        .unwrap();
    kv.set(
        keys::TRAINING_RECORDS,
        r#"[
            {"id":"1","amount":"6000","category":"エルゴ","memo":"UT2","date":"2024/5/3","dateForSort":"2024-05-03T09:30:00.000Z"},
            {"id":"2","amount":8000,"category":"乗艇","memo":"","date":"2024/5/4","dateForSort":"2024-05-04T00:30:00.000Z"},
            {"id":"3","amount":"lots","category":"乗艇","memo":"","date":"2024/5/5","dateForSort":"2024-05-05T00:30:00.000Z"}
        ]"#,
    )
    .unwrap();

    let profile = ProfileStore::new(&kv).load().unwrap().unwrap();
    assert_eq!(profile.gender, Some(Gender::Male));

    let engine = IdtEngine::new(&kv);
    let history = engine.load_history().unwrap();
    assert_eq!(history[0].id, "1718100000000");
    assert_eq!(history[0].weight, "68");
    assert_eq!(best_record(&history).display(), "7:42.5");
    assert_eq!(engine.load_high_score().unwrap().unwrap().score, 78.1);

    let records = TrainingLog::new(&kv).load_records().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].category, Category::Ergometer);
    assert_eq!(total_distance(&records), 14000.0);
}

#[test]
fn test_malformed_documents_name_their_key() {
    let kv = MemoryStore::new();
    kv.set(keys::IDT_HIGH_SCORE, "not json").unwrap();
    kv.set(keys::TRAINING_RECORDS, r#"{"id":"1"}"#).unwrap();

    match IdtEngine::new(&kv).load_high_score() {
        Err(IdtError::Storage(StorageError::ParseError { key, .. })) => {
            assert_eq!(key, keys::IDT_HIGH_SCORE)
        }
        other => panic!("unexpected result: {other:?}"),
    }

    match TrainingLog::new(&kv).load_records() {
        Err(TrainingError::Storage(StorageError::ParseError { key, .. })) => {
            assert_eq!(key, keys::TRAINING_RECORDS)
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
