//! Storage module: key-value persistence, configuration and bulk reset.

pub mod config;
pub mod database;
pub mod kv;
pub mod lenient;
pub mod schema;

pub use config::{AppConfig, ChartSettings, ConfigError, LoggingSettings, StorageSettings};
pub use database::SqliteStore;
pub use kv::{load_json, save_json, KeyValueStore, MemoryStore, StorageError};

use std::collections::HashSet;

/// Fixed keys of the persisted state.
pub mod keys {
    /// User profile document.
    pub const PROFILE: &str = "profile";
    /// IDT calculation history.
    pub const IDT_HISTORY: &str = "idt_history";
    /// Best IDT score ever recorded.
    pub const IDT_HIGH_SCORE: &str = "idt_high_score";
    /// Training distance log.
    pub const TRAINING_RECORDS: &str = "training_records";

    /// Every key owned by the application.
    pub const ALL: [&str; 4] = [PROFILE, IDT_HISTORY, IDT_HIGH_SCORE, TRAINING_RECORDS];
}

/// Delete all application keys.
///
/// Every key is attempted even if an earlier removal fails; the first
/// failure is returned afterwards. Keys removed before a failure stay removed.
pub fn reset_all<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StorageError> {
    let mut first_error = None;

    for key in keys::ALL {
        if let Err(e) = store.remove(key) {
            tracing::warn!("Failed to clear '{}' during reset: {}", key, e);
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => {
            tracing::info!("All stored data cleared");
            Ok(())
        }
    }
}

/// Record id derived from a creation time in milliseconds.
///
/// Bumps the value until it no longer collides with an existing id.
pub(crate) fn next_record_id<'a>(
    millis: i64,
    existing: impl IntoIterator<Item = &'a str>,
) -> String {
    let taken: HashSet<&str> = existing.into_iter().collect();
    let mut candidate = millis;

    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}
