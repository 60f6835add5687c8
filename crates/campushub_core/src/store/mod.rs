//! Persistent key-value store for console collections.
//!
//! # Responsibility
//! - Define the typed load/save contract used by the console state container.
//! - Isolate SQLite and JSON details from service orchestration.
//!
//! # Invariants
//! - `load` never fails on absent or malformed payloads; the supplied default
//!   wins and corruption is only warn-logged.
//! - `save` failures surface to the caller; a half-written collection is
//!   never observable because each key holds one whole-collection snapshot.

use crate::db::DbError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod seed;

pub use kv::SqliteKeyValueStore;

/// Keys under which each collection snapshot is persisted.
pub mod keys {
    pub const ANNOUNCEMENTS: &str = "announcements";
    pub const EVENTS: &str = "events";
    pub const STUDENTS: &str = "students";
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for persistent store access.
///
/// Absent keys and malformed payloads are not errors; only faults of the
/// underlying medium (and unserializable values) reach this type.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize { key, source } => {
                write!(f, "failed to serialize value for key `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Typed access to the durable key-value medium.
///
/// The console core is generic over this trait so tests can substitute a
/// failing or in-memory medium.
pub trait KeyValueStore {
    /// Loads the value stored under `key`.
    ///
    /// # Contract
    /// - Absent key: returns `default`.
    /// - Malformed or wrong-shape payload: returns `default` (warn-logged);
    ///   first run and corruption are indistinguishable by design.
    /// - Medium read failure: surfaces as `StoreError`.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> StoreResult<T>;

    /// Serializes `value` and writes it under `key`, replacing prior content.
    ///
    /// # Errors
    /// - Medium write failure is surfaced, never swallowed; the caller's
    ///   in-memory state stays authoritative and the divergence is reported.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()>;

    /// Returns whether any value (even an empty collection) exists for `key`.
    fn contains(&self, key: &str) -> StoreResult<bool>;
}
