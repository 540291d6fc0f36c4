//! Versioned migrations for the persisted state blob.
//!
//! Migrations run in order against the raw JSON value before it is
//! deserialized, so older persisted shapes upgrade cleanly. A missing or
//! unrecognized version is treated as 0 and every migration applies.

use serde_json::{json, Value};

use crate::storage::{AppState, PersistedEnvelope};
use crate::types::errors::StorageError;
use crate::types::settings::AppSettings;

/// Current persisted-state schema version. Bump when adding a migration.
pub const CURRENT_STATE_VERSION: u32 = 5;

/// Upgrades a persisted envelope of any known version to the current
/// `AppState` shape. Pure: no storage involved.
///
/// - v<3: every link gains a `lockedTitle` boolean (default false).
/// - v<4: settings reset to defaults.
/// - v<5: `settings.themeColor` defaults to `"auto"` when absent.
pub fn migrate(envelope: PersistedEnvelope) -> Result<AppState, StorageError> {
    let version = envelope.version;
    let mut state = envelope.state;

    if version < 3 {
        if let Some(links) = state.get_mut("links").and_then(Value::as_array_mut) {
            for link in links {
                if let Some(obj) = link.as_object_mut() {
                    obj.entry("lockedTitle").or_insert(Value::Bool(false));
                }
            }
        }
    }

    if version < 4 {
        let defaults = serde_json::to_value(AppSettings::default())
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        if let Some(obj) = state.as_object_mut() {
            obj.insert("settings".to_string(), defaults);
        }
    }

    if version < 5 {
        if let Some(settings) = state.get_mut("settings").and_then(Value::as_object_mut) {
            settings
                .entry("themeColor")
                .or_insert(json!("auto"));
        }
    }

    serde_json::from_value(state).map_err(|e| {
        StorageError::MigrationError(format!(
            "Migrated state (from v{}) does not match the current shape: {}",
            version, e
        ))
    })
}
