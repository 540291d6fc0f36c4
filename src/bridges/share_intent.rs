//! Share-intent bridge.
//!
//! Handles content handed over by the OS share sheet. Picks a usable URL
//! candidate out of the payload, ingests it through the store, and tells
//! the caller what to do next based on the configured share action — the
//! store itself knows nothing about navigation or notifications.

use std::sync::Arc;

use crate::services::meta_fetcher::MetaFetcher;
use crate::services::url_norm;
use crate::storage::StateStore;
use crate::store::LinkStore;
use crate::types::settings::ShareAction;

/// What another app handed us through the share sheet.
#[derive(Debug, Clone, Default)]
pub struct SharePayload {
    /// A URL the sharing app identified explicitly.
    pub web_url: Option<String>,
    /// Free-form shared text; used only when it validates as a URL.
    pub text: Option<String>,
    /// Page title supplied by the sharing app, if any.
    pub title: Option<String>,
}

/// What the presentation layer should do after a share arrival was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    pub id: String,
    pub domain: String,
    pub action: ShareAction,
}

/// Ingests a share-intent payload.
///
/// Candidate selection: an explicit `web_url` wins; otherwise the shared
/// text is used when it passes `is_acceptable`. Payloads without a usable
/// candidate are ignored (`None`). A share-supplied title is a hint only —
/// it never locks the title, so enrichment can replace it.
pub fn handle_share_intent<F, S>(
    store: &Arc<LinkStore<F, S>>,
    payload: &SharePayload,
) -> Option<ShareOutcome>
where
    F: MetaFetcher + Send + Sync + 'static,
    S: StateStore + Send + Sync + 'static,
{
    let candidate = payload
        .web_url
        .as_deref()
        .or_else(|| {
            payload
                .text
                .as_deref()
                .filter(|text| url_norm::is_acceptable(text))
        })?
        .to_string();

    let id = Arc::clone(store).add_with_meta(&candidate, payload.title.as_deref(), false);
    let domain = url_norm::extract_domain(&candidate);
    let action = store.settings().share_action;

    Some(ShareOutcome { id, domain, action })
}
