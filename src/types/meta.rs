use serde::{Deserialize, Serialize};

/// Best-effort page metadata extracted from fetched HTML.
///
/// Every field is optional: a failed fetch or a page without the expected
/// tags yields the all-`None` record, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
}

impl UrlMeta {
    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.site_name.is_none()
    }
}
