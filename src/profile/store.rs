//! Profile persistence.

use super::types::{Profile, ProfileError};
use crate::storage::{keys, load_json, save_json, KeyValueStore, StorageError};

/// Reads and writes the single profile document.
pub struct ProfileStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> ProfileStore<'a, S> {
    /// Create a profile store over the given key-value store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the saved profile, if any.
    pub fn load(&self) -> Result<Option<Profile>, StorageError> {
        load_json(self.store, keys::PROFILE)
    }

    /// Load the saved profile, or an empty one.
    pub fn load_or_default(&self) -> Result<Profile, StorageError> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Validate and replace the whole profile.
    pub fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        profile.validate()?;
        save_json(self.store, keys::PROFILE, profile)?;

        tracing::info!("Profile saved for '{}'", profile.name);
        Ok(())
    }
}
