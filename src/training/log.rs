//! Training log persistence.

use chrono::{DateTime, Utc};

use super::types::{display_date, NewTrainingRecord, TrainingError, TrainingRecord};
use crate::storage::{keys, load_json, next_record_id, save_json, KeyValueStore};

/// Append/delete access to the stored training records.
pub struct TrainingLog<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> TrainingLog<'a, S> {
    /// Create a training log over the given key-value store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load all records, latest session first.
    pub fn load_records(&self) -> Result<Vec<TrainingRecord>, TrainingError> {
        let mut records: Vec<TrainingRecord> =
            load_json(self.store, keys::TRAINING_RECORDS)?.unwrap_or_default();
        sort_latest_first(&mut records);

        tracing::debug!("Loaded {} training records", records.len());
        Ok(records)
    }

    /// Validate and append a record now.
    pub fn add_record(&self, new: NewTrainingRecord) -> Result<TrainingRecord, TrainingError> {
        self.add_record_at(new, Utc::now())
    }

    /// Validate and append a record, deriving its id from `now`.
    pub fn add_record_at(
        &self,
        new: NewTrainingRecord,
        now: DateTime<Utc>,
    ) -> Result<TrainingRecord, TrainingError> {
        if !new.amount.is_finite() || new.amount <= 0.0 {
            return Err(TrainingError::InvalidAmount(new.amount));
        }

        let mut records = self.load_records()?;
        let record = TrainingRecord {
            id: next_record_id(now.timestamp_millis(), records.iter().map(|r| r.id.as_str())),
            amount: Some(new.amount),
            category: new.category,
            memo: new.memo.trim().to_string(),
            display_date: display_date(&new.date),
            sort_date: new.date,
        };

        records.insert(0, record.clone());
        sort_latest_first(&mut records);
        save_json(self.store, keys::TRAINING_RECORDS, &records)?;

        tracing::info!(
            "Logged {} m {} on {}",
            new.amount,
            record.category,
            record.display_date
        );
        Ok(record)
    }

    /// Delete a record by id. Returns whether one was removed.
    pub fn delete_record(&self, id: &str) -> Result<bool, TrainingError> {
        let records = self.load_records()?;
        let before = records.len();

        let remaining: Vec<TrainingRecord> = records.into_iter().filter(|r| r.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        save_json(self.store, keys::TRAINING_RECORDS, &remaining)?;
        tracing::info!("Deleted training record {}", id);
        Ok(true)
    }
}

fn sort_latest_first(records: &mut [TrainingRecord]) {
    records.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));
}
