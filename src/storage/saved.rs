//! This module defines the storage interface and implementations for the
//! addon's saved-variables record.
use crate::types::SavedVariables;
use anyhow::Result;
use async_trait::async_trait;
use sled::Db;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};

/// A trait for loading and saving named saved-variables records.
#[async_trait]
pub trait SavedVariablesStore {
    /// Loads the record stored under `name`.
    ///
    /// # Returns
    ///
    /// `None` when nothing was saved yet, or when the stored value cannot be
    /// decoded. Both cases are treated as a first run.
    ///
    /// # Errors
    ///
    /// This function will return an error if the underlying storage fails.
    async fn load(&self, name: &str) -> Result<Option<SavedVariables>>;

    /// Replaces the record stored under `name`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the record cannot be written.
    async fn save(&self, name: &str, saved: &SavedVariables) -> Result<()>;
}

/// Decodes a stored value, treating undecodable data as absent.
fn decode_record(name: &str, data: &[u8]) -> Option<SavedVariables> {
    match serde_json::from_slice(data) {
        Ok(saved) => Some(saved),
        Err(e) => {
            warn!("Discarding malformed saved variables '{}': {}", name, e);
            None
        }
    }
}

/// A `SavedVariablesStore` implementation using `sled` for storage.
pub struct SledSavedVariablesStore {
    tree: sled::Tree,
}

impl SledSavedVariablesStore {
    /// Creates a new `SledSavedVariablesStore`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the `saved_variables` tree cannot
    /// be opened.
    pub fn new(db: Db) -> Result<Self> {
        let tree = db.open_tree("saved_variables")?;
        Ok(Self { tree })
    }
}

#[async_trait]
impl SavedVariablesStore for SledSavedVariablesStore {
    async fn load(&self, name: &str) -> Result<Option<SavedVariables>> {
        let Some(value) = self.tree.get(name.as_bytes())? else {
            debug!("No saved variables found for '{}'", name);
            return Ok(None);
        };

        Ok(decode_record(name, &value))
    }

    async fn save(&self, name: &str, saved: &SavedVariables) -> Result<()> {
        let value = serde_json::to_vec(saved)?;
        self.tree.insert(name.as_bytes(), value)?;
        self.tree.flush_async().await?;
        debug!(
            "Saved {} messages to saved variables '{}'",
            saved.messages.len(),
            name
        );
        Ok(())
    }
}

/// A `SavedVariablesStore` that keeps records in memory for the lifetime of
/// the process.
#[derive(Default)]
pub struct MemorySavedVariablesStore {
    records: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySavedVariablesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw bytes under `name`, bypassing serialization.
    pub fn insert_raw(&self, name: &str, data: impl Into<Vec<u8>>) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.to_string(), data.into());
    }
}

#[async_trait]
impl SavedVariablesStore for MemorySavedVariablesStore {
    async fn load(&self, name: &str) -> Result<Option<SavedVariables>> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(records.get(name).and_then(|data| decode_record(name, data)))
    }

    async fn save(&self, name: &str, saved: &SavedVariables) -> Result<()> {
        let value = serde_json::to_vec(saved)?;
        self.insert_raw(name, value);
        Ok(())
    }
}
