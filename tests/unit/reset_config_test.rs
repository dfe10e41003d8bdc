//! Bulk reset and configuration round-trips.

use chrono::{TimeZone, Utc};
use rowlog::idt::{ErgoTime, IdtEngine};
use rowlog::profile::{Gender, Profile, ProfileStore};
use rowlog::storage::config::{load_config_from, save_config};
use rowlog::storage::{keys, reset_all, KeyValueStore, SqliteStore};
use rowlog::training::{Category, NewTrainingRecord, TrainingLog};
use rowlog::AppConfig;
use tempfile::TempDir;

#[test]
fn test_reset_removes_every_key() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&dir.path().join("rowlog.db")).unwrap();

    ProfileStore::new(&store)
        .save(&Profile::new("Rower").with_weight("75").with_gender(Gender::Female))
        .unwrap();
    let time: ErgoTime = "7:45.0".parse().unwrap();
    IdtEngine::new(&store).record_score(time).unwrap();
    let when = Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap().fixed_offset();
    TrainingLog::new(&store)
        .add_record(NewTrainingRecord::new(5000.0, Category::Ergometer, when))
        .unwrap();

    for key in keys::ALL {
        assert!(store.get(key).unwrap().is_some(), "{key} not written");
    }

    reset_all(&store).unwrap();

    assert!(store.keys().unwrap().is_empty());
    assert!(IdtEngine::new(&store).load_high_score().unwrap().is_none());
    assert!(ProfileStore::new(&store).load().unwrap().is_none());

    // Resetting an empty store is fine
    reset_all(&store).unwrap();
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();

    let defaults = load_config_from(dir.path()).unwrap();
    assert_eq!(defaults.database_path(), dir.path().join("rowlog.db"));
    assert_eq!(defaults.chart.window_days, 7);
    assert_eq!(defaults.logging.filter, "info");

    let mut config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    config.chart.window_days = 14;
    config.storage.database_file = "training.db".to_string();
    config.logging.filter = "rowlog=debug".to_string();
    save_config(&config).unwrap();

    let loaded = load_config_from(dir.path()).unwrap();
    assert_eq!(loaded, config);
}
