//! SQLite-backed key-value store implementation.
//!
//! # Responsibility
//! - Persist JSON collection snapshots in the `kv_entries` table.
//! - Apply the default-wins fallback policy on absent or corrupt payloads.
//!
//! # Invariants
//! - One key maps to exactly one row; writes replace the row atomically.

use super::{KeyValueStore, StoreError, StoreResult};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key-value store over a migrated SQLite connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps a connection opened via [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Gives back the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }

    fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> StoreResult<T> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(default);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                // Wrong-shape payloads degrade to the default, same as a
                // first run. The warn line is the only trace left behind.
                warn!(
                    "event=kv_load module=store status=fallback key={} error={}",
                    key, err
                );
                Ok(default)
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, payload],
        )?;

        Ok(())
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.read_raw(key)?.is_some())
    }
}
