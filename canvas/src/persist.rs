//! Persisted widget state and the key-value store it lives in.
//!
//! The whole arrangement is one JSON record under [`STORAGE_KEY`]. There is
//! no schema version; a record that fails to decode is reported as
//! [`PersistError::Decode`] and the engine treats it as "nothing saved".

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, ViewTransform};
use crate::consts::STORAGE_KEY;
use crate::polygon::PolygonDescriptor;

/// Errors from reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode state: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A placed polygon as stored: descriptor fields plus its offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedPlacement {
    pub points: Vec<String>,
    pub color: String,
    pub offset: Point,
}

/// The durable record: tray, workspace, and view transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersistedState {
    pub tray: Vec<PolygonDescriptor>,
    pub workspace: Vec<PersistedPlacement>,
    pub transform: ViewTransform,
}

impl PersistedState {
    /// Encode as the JSON text written to storage.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(PersistError::Encode)
    }

    /// Decode from stored JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Decode`] if the text is not a valid record.
    pub fn from_json(raw: &str) -> Result<Self, PersistError> {
        serde_json::from_str(raw).map_err(PersistError::Decode)
    }
}

/// Minimal string key-value storage, shaped after `window.localStorage`.
pub trait KeyValueStore {
    /// Read the value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Unavailable`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Unavailable`] if the backing store rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Unavailable`] if the backing store cannot be modified.
    fn remove_item(&mut self, key: &str) -> Result<(), PersistError>;
}

/// In-memory [`KeyValueStore`] for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` currently has a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Write `state` under [`STORAGE_KEY`].
///
/// # Errors
///
/// Propagates encode and storage errors.
pub fn write(store: &mut impl KeyValueStore, state: &PersistedState) -> Result<(), PersistError> {
    let raw = state.to_json()?;
    store.set_item(STORAGE_KEY, &raw)
}

/// Read the record under [`STORAGE_KEY`]; `Ok(None)` when nothing is saved.
///
/// # Errors
///
/// Propagates storage errors and [`PersistError::Decode`] for a malformed record.
pub fn read(store: &impl KeyValueStore) -> Result<Option<PersistedState>, PersistError> {
    store
        .get_item(STORAGE_KEY)?
        .map(|raw| PersistedState::from_json(&raw))
        .transpose()
}

/// Delete the record under [`STORAGE_KEY`].
///
/// # Errors
///
/// Propagates storage errors.
pub fn remove(store: &mut impl KeyValueStore) -> Result<(), PersistError> {
    store.remove_item(STORAGE_KEY)
}
