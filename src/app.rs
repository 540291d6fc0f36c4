//! App Core for Linkstash.
//!
//! Owns the link store with an explicit lifecycle: state is loaded (and
//! migrated) once here at startup, mutations flush on write, and everything
//! downstream receives the store by `Arc` — no module-level globals.

use std::path::PathBuf;
use std::sync::Arc;

use crate::services::meta_fetcher::{HttpMetaFetcher, DEFAULT_FETCH_TIMEOUT};
use crate::storage::json_file::JsonFileStore;
use crate::store::LinkStore;

/// Central application struct holding the store and its wiring.
pub struct App {
    pub store: Arc<LinkStore<HttpMetaFetcher, JsonFileStore>>,
}

impl App {
    /// Creates the app with the reqwest-backed fetcher and the JSON state
    /// file at `state_path` (or the platform data directory when `None`).
    ///
    /// Loading runs the persisted-state migrations, so a state file written
    /// by any older schema version comes up in the current shape.
    pub fn new(state_path: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let fetcher = HttpMetaFetcher::new(DEFAULT_FETCH_TIMEOUT)
            .map_err(|e| format!("HttpMetaFetcher init failed: {}", e))?;
        let storage = JsonFileStore::new(state_path);
        let store = LinkStore::open(fetcher, storage)
            .map_err(|e| format!("LinkStore init failed: {}", e))?;

        Ok(Self {
            store: Arc::new(store),
        })
    }
}
