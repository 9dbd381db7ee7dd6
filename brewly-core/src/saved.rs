//! Saved cafés kept on the local device.
//!
//! The whole list is stored as a single JSON array under
//! [`SAVED_CAFES_KEY`] and rewritten after every mutation.

use thiserror::Error;

use crate::{
    boundary::SavedCafeRecord,
    entities::*,
    gateways::storage::{KeyValueStore, StorageError},
};

pub const SAVED_CAFES_KEY: &str = "cafeCompanionSaved";

/// File name for exporting the raw saved list.
pub const EXPORT_FILE_NAME: &str = "cafe-companion-saved.json";

#[derive(Debug, Error)]
#[error("Malformed local state under key '{key}': {source}")]
pub struct MalformedLocalState {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Malformed(#[from] MalformedLocalState),
}

#[derive(Debug)]
pub struct SavedCafes<S> {
    storage: S,
}

impl<S> SavedCafes<S>
where
    S: KeyValueStore,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn try_load(&self) -> Result<Vec<SavedCafe>, LoadError> {
        let Some(json) = self.storage.get_item(SAVED_CAFES_KEY)? else {
            return Ok(vec![]);
        };
        let records: Vec<SavedCafeRecord> =
            serde_json::from_str(&json).map_err(|source| MalformedLocalState {
                key: SAVED_CAFES_KEY,
                source,
            })?;
        Ok(records.into_iter().map(SavedCafe::from).collect())
    }

    /// Unreadable or corrupt contents are treated as an empty list.
    pub fn load(&self) -> Vec<SavedCafe> {
        self.try_load().unwrap_or_else(|err| {
            log::warn!("Discarding saved cafés: {err}");
            vec![]
        })
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.load().iter().any(|saved| saved.id.as_str() == id)
    }

    /// Removes the review from the list if present, appends it otherwise.
    pub fn toggle(&self, review: &Review) -> Result<Toggled, StorageError> {
        let mut saved = self.load();
        let toggled = if let Some(pos) = saved.iter().position(|s| s.id == review.id) {
            saved.remove(pos);
            Toggled::Removed
        } else {
            saved.push(SavedCafe::from(review));
            Toggled::Added
        };
        self.store(saved)?;
        log::debug!("Toggled saved café {}: {toggled}", review.id);
        Ok(toggled)
    }

    /// The stored JSON exactly as it is kept in local storage.
    pub fn export(&self) -> Result<Option<String>, StorageError> {
        self.storage.get_item(SAVED_CAFES_KEY)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(SAVED_CAFES_KEY)
    }

    fn store(&self, saved: Vec<SavedCafe>) -> Result<(), StorageError> {
        let records: Vec<_> = saved.into_iter().map(SavedCafeRecord::from).collect();
        let json = serde_json::to_string(&records).map_err(anyhow::Error::from)?;
        self.storage.set_item(SAVED_CAFES_KEY, &json)
    }
}
