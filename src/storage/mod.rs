//! Durable state storage for Linkstash.
//!
//! The full application state (link collection + settings) is persisted as
//! one versioned JSON blob. The engine behind it is opaque to the store:
//! anything with load/save semantics works, selected via `StateStore`.

pub mod json_file;
pub mod migrations;

use serde::{Deserialize, Serialize};

use crate::types::errors::StorageError;
use crate::types::link::LinkRecord;
use crate::types::settings::AppSettings;

/// The in-memory application state: the single source of truth once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub settings: AppSettings,
}

/// The persisted shape: a schema version plus the raw state blob.
///
/// `state` stays a `serde_json::Value` until migrations have run, so older
/// shapes can be upgraded field-by-field before deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedEnvelope {
    #[serde(default)]
    pub version: u32,
    pub state: serde_json::Value,
}

impl PersistedEnvelope {
    /// Wraps current-shape state at the current schema version.
    pub fn current(state: &AppState) -> Result<Self, StorageError> {
        let value = serde_json::to_value(state)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        Ok(Self {
            version: migrations::CURRENT_STATE_VERSION,
            state: value,
        })
    }
}

/// Opaque durable store with load/save semantics.
pub trait StateStore {
    /// Loads the persisted envelope, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<PersistedEnvelope>, StorageError>;
    /// Replaces the persisted envelope. Called after every mutation;
    /// failures are treated as non-fatal by the caller.
    fn save(&self, envelope: &PersistedEnvelope) -> Result<(), StorageError>;
}

/// In-memory `StateStore` for tests and ephemeral sessions.
///
/// Clones share the same slot, so a test can hand one clone to the store
/// and inspect what got saved through another.
#[derive(Clone)]
pub struct MemoryStore {
    slot: std::sync::Arc<std::sync::Mutex<Option<PersistedEnvelope>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            slot: std::sync::Arc::new(std::sync::Mutex::new(None)),
        }
    }

    /// Starts pre-populated, as if the envelope had been saved earlier.
    pub fn with_envelope(envelope: PersistedEnvelope) -> Self {
        Self {
            slot: std::sync::Arc::new(std::sync::Mutex::new(Some(envelope))),
        }
    }

    /// The most recently saved envelope, if any.
    pub fn saved(&self) -> Option<PersistedEnvelope> {
        self.slot.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedEnvelope>, StorageError> {
        Ok(self.slot.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    fn save(&self, envelope: &PersistedEnvelope) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(|p| p.into_inner()) = Some(envelope.clone());
        Ok(())
    }
}
