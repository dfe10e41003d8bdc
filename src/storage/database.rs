//! SQLite-backed key-value store using rusqlite.

use crate::storage::kv::{KeyValueStore, StorageError};
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Key-value store persisted in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store file, creating missing parent directories.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        let store = Connection::open(path)
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))
            .and_then(Self::with_connection)?;

        tracing::debug!("Opened store at {}", path.display());
        Ok(store)
    }

    /// Open a throwaway store that lives only as long as the value.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Connection::open_in_memory()
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))
            .and_then(Self::with_connection)
    }

    /// Wrap a connection and bring its schema up to date.
    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

        let store = Self { conn };
        let applied = store.schema_version()?;
        if applied < CURRENT_VERSION {
            store.migrate(applied)?;
        }

        Ok(store)
    }

    /// Highest applied schema version, 0 for a fresh file.
    fn schema_version(&self) -> Result<i32, StorageError> {
        self.conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |row| row.get(0),
            )
            .map_err(|e| StorageError::ReadFailed {
                key: "schema_version".to_string(),
                message: e.to_string(),
            })
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), StorageError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

            tracing::info!("Store migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    /// List all stored keys in alphabetical order.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let read_failed = |e: rusqlite::Error| StorageError::ReadFailed {
            key: "*".to_string(),
            message: e.to_string(),
        };

        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv ORDER BY key")
            .map_err(read_failed)?;

        let rows = stmt.query_map([], |row| row.get(0)).map_err(read_failed)?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row.map_err(read_failed)?);
        }

        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
