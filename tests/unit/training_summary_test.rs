//! Integration tests for the training log and its views.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rowlog::storage::SqliteStore;
use rowlog::training::{
    distance_milestone, recent_window_aggregate, records_on_date, total_distance, training_days,
    Category, Milestone, NewTrainingRecord, TrainingLog,
};

fn session(s: &str) -> DateTime<chrono::FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    let log = TrainingLog::new(&store);
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();

    let sessions = [
        (12000.0, Category::OnWater, "2024-05-10T06:30:00+09:00"),
        (6000.0, Category::Ergometer, "2024-05-10T17:45:00+09:00"),
        (8000.0, Category::OnWater, "2024-05-07T06:30:00+09:00"),
        (10000.0, Category::Ergometer, "2024-05-05T17:45:00+09:00"),
        (20000.0, Category::OnWater, "2024-04-20T06:30:00+09:00"),
    ];
    for (amount, category, when) in sessions {
        log.add_record_at(NewTrainingRecord::new(amount, category, session(when)), now)
            .unwrap();
    }
    store
}

#[test]
fn test_ids_unique_when_added_in_same_millisecond() {
    let store = seeded_store();
    let records = TrainingLog::new(&store).load_records().unwrap();

    let mut ids: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_total_distance_and_milestone() {
    let store = seeded_store();
    let records = TrainingLog::new(&store).load_records().unwrap();

    let total = total_distance(&records);
    assert_eq!(total, 56000.0);
    assert_eq!(distance_milestone(total), Milestone::Marathon);
}

#[test]
fn test_calendar_views() {
    let store = seeded_store();
    let records = TrainingLog::new(&store).load_records().unwrap();

    let on_tenth = records_on_date(&records, day(2024, 5, 10));
    assert_eq!(on_tenth.len(), 2);
    assert!(on_tenth.iter().all(|r| r.display_date == "2024/5/10"));

    let days = training_days(&records);
    assert_eq!(days.len(), 4);
    assert!(!days.contains(&day(2024, 5, 6)));
}

#[test]
fn test_week_window() {
    let store = seeded_store();
    let records = TrainingLog::new(&store).load_records().unwrap();

    let window = recent_window_aggregate(&records, 7, &Category::ALL, day(2024, 5, 10));
    let labels: Vec<_> = window.days.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["5/4", "5/5", "5/6", "5/7", "5/8", "5/9", "5/10"]);

    assert_eq!(window.days[1].amounts, vec![0.0, 10000.0]);
    assert_eq!(window.days[3].amounts, vec![8000.0, 0.0]);
    assert_eq!(window.days[6].amounts, vec![12000.0, 6000.0]);
    // The April session is outside the window
    assert_eq!(window.category_total(Category::OnWater), 20000.0);
}

#[test]
fn test_delete_updates_views() {
    let store = seeded_store();
    let log = TrainingLog::new(&store);
    let records = log.load_records().unwrap();
    let oldest = records.last().unwrap().id.clone();

    assert!(log.delete_record(&oldest).unwrap());
    assert_eq!(total_distance(&log.load_records().unwrap()), 36000.0);
}
