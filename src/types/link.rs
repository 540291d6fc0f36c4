use serde::{Deserialize, Serialize};

/// One saved bookmark: a URL, its derived grouping domain, and whatever
/// display metadata has been fetched or typed in so far.
///
/// Field names serialize in camelCase to stay compatible with the persisted
/// state file (`siteName`, `createdAt`, `lastMetaAt`). The title lock is
/// stored as `lockedTitle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub id: String,
    pub url: String,
    pub domain: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    /// True when the title was supplied or edited by the user; metadata
    /// enrichment must never overwrite a locked title.
    #[serde(rename = "lockedTitle", default)]
    pub title_locked: bool,
    /// Creation time in epoch milliseconds. Immutable; newest-first sort key.
    pub created_at: i64,
    /// Time of the most recent successful metadata fetch, epoch milliseconds.
    #[serde(default)]
    pub last_meta_at: Option<i64>,
}

/// Shallow patch applied to a `LinkRecord` by `LinkStore::update`.
///
/// Each outer `Some` replaces the corresponding field; `None` leaves it
/// alone. For the optional string fields the inner `Option` distinguishes
/// "set to this value" from "clear the field".
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub site_name: Option<Option<String>>,
    pub title_locked: Option<bool>,
    pub last_meta_at: Option<Option<i64>>,
}

impl LinkPatch {
    /// Applies the patch to a record in place.
    ///
    /// `id` and `created_at` are immutable and have no patch fields. Keeping
    /// `domain` in sync with a changed `url` is the caller's job; `apply`
    /// writes exactly what it is given.
    pub fn apply(&self, record: &mut LinkRecord) {
        if let Some(url) = &self.url {
            record.url = url.clone();
        }
        if let Some(domain) = &self.domain {
            record.domain = domain.clone();
        }
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(image) = &self.image {
            record.image = image.clone();
        }
        if let Some(site_name) = &self.site_name {
            record.site_name = site_name.clone();
        }
        if let Some(locked) = self.title_locked {
            record.title_locked = locked;
        }
        if let Some(last_meta_at) = self.last_meta_at {
            record.last_meta_at = last_meta_at;
        }
    }
}
