//! Deep-link bridge.
//!
//! Handles `linkstash://add?url=...` links delivered by the OS. Parse
//! failures are logged and leave store state untouched.

use std::sync::Arc;

use url::Url;

use crate::services::meta_fetcher::MetaFetcher;
use crate::services::url_norm;
use crate::storage::StateStore;
use crate::store::LinkStore;
use crate::types::errors::DeepLinkError;

/// Parses a deep link and returns the URL candidate it carries.
///
/// Accepts an `add` path (host or first path segment, depending on how the
/// platform renders the custom scheme) with a `url` query parameter that
/// passes `is_acceptable`.
pub fn parse_deep_link(raw: &str) -> Result<String, DeepLinkError> {
    let parsed = Url::parse(raw).map_err(|_| DeepLinkError::Unparsable(raw.to_string()))?;

    // linkstash://add?url=... parses "add" as the host;
    // linkstash:/add?url=... parses it as the path.
    let path = parsed
        .host_str()
        .map(str::to_string)
        .unwrap_or_else(|| parsed.path().trim_start_matches('/').to_string());
    if path != "add" {
        return Err(DeepLinkError::UnknownPath(path));
    }

    let candidate = parsed
        .query_pairs()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    if candidate.is_empty() || !url_norm::is_acceptable(&candidate) {
        return Err(DeepLinkError::BadCandidate(candidate));
    }

    Ok(candidate)
}

/// Ingests a deep link through the store. Returns the new record's id, or
/// `None` when the link did not parse — in which case the failure is logged
/// and nothing changes.
pub fn handle_deep_link<F, S>(store: &Arc<LinkStore<F, S>>, raw: &str) -> Option<String>
where
    F: MetaFetcher + Send + Sync + 'static,
    S: StateStore + Send + Sync + 'static,
{
    match parse_deep_link(raw) {
        Ok(candidate) => Some(Arc::clone(store).add_with_meta(&candidate, None, false)),
        Err(e) => {
            eprintln!("[deeplink] {}", e);
            None
        }
    }
}
