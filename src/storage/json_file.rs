// JSON-file state store.
// One blob on disk at a platform-specific data path, read once at startup
// and rewritten after every mutation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::storage::{PersistedEnvelope, StateStore};
use crate::types::errors::StorageError;

const STATE_FILE_NAME: &str = "state.json";

/// `StateStore` backed by a single JSON file on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at the given path, or at the platform data directory
    /// (`<data dir>/state.json`) when `path_override` is `None`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let path = match path_override {
            Some(p) => p,
            None => platform::get_data_dir().join(STATE_FILE_NAME),
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    /// Reads the envelope from disk. A missing file is not an error — it
    /// just means nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedEnvelope>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::IoError(format!("Failed to read state file: {}", e)))?;

        let envelope: PersistedEnvelope = serde_json::from_str(&content).map_err(|e| {
            StorageError::SerializationError(format!("Failed to parse state file: {}", e))
        })?;

        Ok(Some(envelope))
    }

    /// Writes the envelope to disk, creating parent directories if needed.
    fn save(&self, envelope: &PersistedEnvelope) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::IoError(format!("Failed to create state directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(envelope).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize state: {}", e))
        })?;

        fs::write(&self.path, json)
            .map_err(|e| StorageError::IoError(format!("Failed to write state file: {}", e)))?;

        Ok(())
    }
}
