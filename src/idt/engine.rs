//! IDT history and high-score maintenance.
//!
//! History is kept newest first and re-sorted on every load and write. The
//! high score only ever goes up: it is replaced when a new score beats it and
//! is never recomputed from history, so deleting records never lowers it.

use chrono::{DateTime, Utc};

use super::error::{IdtError, IdtResult};
use super::score::compute_score;
use super::types::{ErgoTime, HighScore, IdtRecord};
use crate::profile::{ProfileAttribute, ProfileStore};
use crate::storage::{keys, load_json, next_record_id, save_json, KeyValueStore, StorageError};

/// Result of a successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    /// The stored record
    pub record: IdtRecord,
    /// Whether the record replaced the high score
    pub new_high_score: bool,
}

/// Scores ergometer times and maintains the persisted history.
pub struct IdtEngine<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> IdtEngine<'a, S> {
    /// Create an engine over the given key-value store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the history, newest first. Empty if nothing was stored.
    pub fn load_history(&self) -> IdtResult<Vec<IdtRecord>> {
        let mut history: Vec<IdtRecord> =
            load_json(self.store, keys::IDT_HISTORY)?.unwrap_or_default();

        for record in &history {
            record.validate().map_err(|message| StorageError::ParseError {
                key: keys::IDT_HISTORY.to_string(),
                message,
            })?;
        }

        sort_newest_first(&mut history);
        Ok(history)
    }

    /// Load the high score, if one was ever set.
    pub fn load_high_score(&self) -> IdtResult<Option<HighScore>> {
        Ok(load_json(self.store, keys::IDT_HIGH_SCORE)?)
    }

    /// Score `time` against the saved profile and record it now.
    pub fn record_score(&self, time: ErgoTime) -> IdtResult<ScoreOutcome> {
        self.record_score_at(time, Utc::now())
    }

    /// Score `time` against the saved profile and record it at `now`.
    ///
    /// Profile and time are checked before anything is written. History is
    /// written before the high score; a failure in between leaves the new
    /// record in history without touching the high score.
    pub fn record_score_at(&self, time: ErgoTime, now: DateTime<Utc>) -> IdtResult<ScoreOutcome> {
        let profile = ProfileStore::new(self.store).load_or_default()?;

        if let Some(attribute) = profile.missing_scoring_attribute() {
            return Err(IdtError::MissingProfileAttribute(attribute));
        }
        let weight = profile.weight.as_deref().unwrap_or_default().trim().to_string();
        let weight_kg = profile
            .weight_kg()
            .ok_or_else(|| IdtError::InvalidWeight(weight.clone()))?;
        let gender = profile
            .gender
            .ok_or(IdtError::MissingProfileAttribute(ProfileAttribute::Gender))?;

        let seconds = time.total_seconds();
        let score = compute_score(seconds, weight_kg, gender)?;

        let mut history = self.load_history()?;
        let record = IdtRecord {
            id: next_record_id(now.timestamp_millis(), history.iter().map(|r| r.id.as_str())),
            idt_score: score,
            ergo_time_seconds: seconds,
            ergo_time_display: time.to_string(),
            weight,
            created_at: now,
        };

        history.insert(0, record.clone());
        sort_newest_first(&mut history);
        save_json(self.store, keys::IDT_HISTORY, &history)?;

        tracing::info!(
            "Recorded IDT {} for {} ({} kg, {})",
            record.score_display(),
            record.ergo_time_display,
            record.weight,
            gender
        );

        let new_high_score = self.raise_high_score(&record)?;

        Ok(ScoreOutcome {
            record,
            new_high_score,
        })
    }

    /// Replace the high score if `record` strictly beats it.
    fn raise_high_score(&self, record: &IdtRecord) -> IdtResult<bool> {
        let current = self.load_high_score()?.map_or(0.0, |h| h.score);

        if record.idt_score > current {
            save_json(self.store, keys::IDT_HIGH_SCORE, &HighScore::from(record))?;
            tracing::info!("New IDT high score {} (was {:.2})", record.score_display(), current);
            return Ok(true);
        }

        Ok(false)
    }

    /// Delete a history record by id.
    ///
    /// Returns whether a record was removed. The high score is left alone.
    pub fn delete_record(&self, id: &str) -> IdtResult<bool> {
        let history = self.load_history()?;
        let before = history.len();

        let remaining: Vec<IdtRecord> = history.into_iter().filter(|r| r.id != id).collect();
        if remaining.len() == before {
            tracing::debug!("No IDT record with id {}", id);
            return Ok(false);
        }

        save_json(self.store, keys::IDT_HISTORY, &remaining)?;
        tracing::info!("Deleted IDT record {}", id);
        Ok(true)
    }
}

fn sort_newest_first(history: &mut [IdtRecord]) {
    history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
