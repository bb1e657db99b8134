//! This module defines the storage interface and implementations for the
//! addon's persisted data.
pub mod saved;

pub use saved::{MemorySavedVariablesStore, SavedVariablesStore, SledSavedVariablesStore};
