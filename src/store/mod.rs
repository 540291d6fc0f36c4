//! Link Store for Linkstash.
//!
//! The single owner of application state: an in-memory collection of
//! `LinkRecord`s plus `AppSettings`, loaded once at startup and written back
//! to durable storage after every mutation. All mutations are synchronous
//! and atomic; metadata enrichment is the only suspending operation and
//! merges its result back through the same lock when it completes.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::services::meta_fetcher::MetaFetcher;
use crate::services::url_norm;
use crate::storage::{migrations, AppState, PersistedEnvelope, StateStore};
use crate::types::errors::StorageError;
use crate::types::link::{LinkPatch, LinkRecord};
use crate::types::settings::{AppSettings, SettingsPatch};

/// Application state store: link collection + settings behind one lock,
/// a metadata fetcher for enrichment, and a durable storage backend.
///
/// Mutating operations never suspend while holding the lock, so callers
/// always observe a fully-formed snapshot — a fetch in flight interleaves
/// only between committed states.
pub struct LinkStore<F, S> {
    state: Mutex<AppState>,
    fetcher: F,
    storage: S,
}

impl<F, S> LinkStore<F, S>
where
    F: MetaFetcher + Send + Sync + 'static,
    S: StateStore + Send + Sync + 'static,
{
    /// Loads persisted state (running migrations as needed) and builds the
    /// store. A backend with nothing saved yet yields empty state.
    pub fn open(fetcher: F, storage: S) -> Result<Self, StorageError> {
        let state = match storage.load()? {
            Some(envelope) => migrations::migrate(envelope)?,
            None => AppState::default(),
        };
        Ok(Self {
            state: Mutex::new(state),
            fetcher,
            storage,
        })
    }

    /// Current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    fn lock_state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Writes the committed state to durable storage. Failures are logged
    /// and ignored: the in-memory state stays authoritative for the session.
    fn persist(&self, state: &AppState) {
        let result = PersistedEnvelope::current(state).and_then(|env| self.storage.save(&env));
        if let Err(e) = result {
            eprintln!("[store] persist failed: {}", e);
        }
    }

    /// Adds a link synchronously and returns its id. The URL is normalized
    /// and the grouping domain derived before anything is stored; the new
    /// record goes to the front of the collection (newest first).
    ///
    /// The title locks only when a non-empty hint title was actually given.
    /// No network is touched here.
    pub fn add(&self, url: &str, hint_title: Option<&str>, lock_title: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let normalized = url_norm::normalize(url);
        let hint = hint_title.map(str::trim).filter(|t| !t.is_empty());

        let record = LinkRecord {
            id: id.clone(),
            url: normalized.clone(),
            domain: url_norm::extract_domain(&normalized),
            title: hint.map(str::to_string),
            description: None,
            image: None,
            site_name: None,
            title_locked: lock_title && hint.is_some(),
            created_at: Self::now_millis(),
            last_meta_at: None,
        };

        let mut state = self.lock_state();
        state.links.insert(0, record);
        self.persist(&state);
        id
    }

    /// The single ingestion entry point: adds the link synchronously, then
    /// enriches it with fetched metadata in a background task. Returns the
    /// id without waiting for enrichment — callers that need the enriched
    /// state re-read by id.
    pub fn add_with_meta(
        self: Arc<Self>,
        url: &str,
        hint_title: Option<&str>,
        lock_title: bool,
    ) -> String {
        let id = self.add(url, hint_title, lock_title);
        let task_id = id.clone();
        tokio::spawn(async move {
            self.enrich(&task_id).await;
        });
        id
    }

    /// Re-runs metadata enrichment for an existing record, awaiting the
    /// fetch. No-op when the id is absent. Concurrent refetches for the
    /// same id are not deduplicated: last to complete wins.
    pub async fn refetch_meta(&self, id: &str) {
        self.enrich(id).await;
    }

    /// Fetches metadata for the record's current URL and merges the result.
    ///
    /// The merge is per-field: a fetched value overwrites only when present,
    /// and a locked title is never touched. The record's URL is captured at
    /// fetch start; if the record is gone by completion the merge is a
    /// silent no-op, and if its URL changed in the meantime the result is
    /// discarded as stale.
    async fn enrich(&self, id: &str) {
        let fetch_url = {
            let state = self.lock_state();
            match state.links.iter().find(|l| l.id == id) {
                Some(record) => record.url.clone(),
                None => return,
            }
        };

        let meta = self.fetcher.fetch_meta(&fetch_url).await;

        let mut state = self.lock_state();
        let Some(record) = state.links.iter_mut().find(|l| l.id == id) else {
            return;
        };
        if record.url != fetch_url {
            return;
        }

        if !record.title_locked {
            if let Some(title) = meta.title {
                record.title = Some(title);
            }
        }
        if let Some(description) = meta.description {
            record.description = Some(description);
        }
        if let Some(image) = meta.image {
            record.image = Some(image);
        }
        if let Some(site_name) = meta.site_name {
            record.site_name = Some(site_name);
        }
        record.last_meta_at = Some(Self::now_millis());

        self.persist(&state);
    }

    /// Shallow-merges a patch into the record with the given id; absent ids
    /// are a no-op, not an error.
    ///
    /// Invariant maintenance is the caller's job: an edit that changes `url`
    /// must put the recomputed domain in the same patch.
    pub fn update(&self, id: &str, patch: &LinkPatch) {
        let mut state = self.lock_state();
        let Some(record) = state.links.iter_mut().find(|l| l.id == id) else {
            return;
        };
        patch.apply(record);
        self.persist(&state);
    }

    /// Removes a record. Idempotent: removing an absent id is a no-op.
    pub fn remove(&self, id: &str) {
        let mut state = self.lock_state();
        let before = state.links.len();
        state.links.retain(|l| l.id != id);
        if state.links.len() != before {
            self.persist(&state);
        }
    }

    /// Moves every record under `old_domain` to `new_domain`.
    pub fn rename_domain(&self, old_domain: &str, new_domain: &str) {
        let mut state = self.lock_state();
        let mut changed = false;
        for record in state.links.iter_mut().filter(|l| l.domain == old_domain) {
            record.domain = new_domain.to_string();
            changed = true;
        }
        if changed {
            self.persist(&state);
        }
    }

    /// Shallow-merges a patch into the settings.
    pub fn update_settings(&self, patch: &SettingsPatch) {
        let mut state = self.lock_state();
        patch.apply(&mut state.settings);
        self.persist(&state);
    }

    /// Empties the link collection. Settings are kept.
    pub fn clear_all(&self) {
        let mut state = self.lock_state();
        state.links.clear();
        self.persist(&state);
    }

    /// A consistent snapshot of the whole collection, in insertion order
    /// (newest first). Grouping, filtering, and sorting belong to consumers.
    pub fn snapshot(&self) -> Vec<LinkRecord> {
        self.lock_state().links.clone()
    }

    /// Reads one record by id.
    pub fn get(&self, id: &str) -> Option<LinkRecord> {
        self.lock_state().links.iter().find(|l| l.id == id).cloned()
    }

    /// Current settings.
    pub fn settings(&self) -> AppSettings {
        self.lock_state().settings.clone()
    }

    /// Number of saved links.
    pub fn len(&self) -> usize {
        self.lock_state().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().links.is_empty()
    }
}
