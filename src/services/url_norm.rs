// URL normalization and validation for Linkstash.
// The single gate between raw user/share-intent text and anything the
// store is allowed to persist.

use url::Url;

/// Normalizes raw input into a URL string with an explicit scheme.
///
/// Trims whitespace; input already starting with `http://` or `https://`
/// (case-insensitive) is returned unchanged, anything else gets `https://`
/// prepended. Total and idempotent — never fails.
pub fn normalize(raw: &str) -> String {
    let s = raw.trim();
    if has_http_scheme(s) {
        s.to_string()
    } else {
        format!("https://{}", s)
    }
}

/// Permissive validator: accepts bare domains or full http(s) URLs.
///
/// Normalizes, parses, and requires a host containing at least one `.` —
/// bare words like "localhost" are rejected. This is the sole gate callers
/// use to enable their Add/Save actions.
pub fn is_acceptable(raw: &str) -> bool {
    match Url::parse(&normalize(raw)) {
        Ok(u) => u.host_str().is_some_and(|h| h.contains('.')),
        Err(_) => false,
    }
}

/// Extracts the grouping domain: lowercase hostname with a leading `www.`
/// stripped, e.g. `"youtube.com"`.
///
/// On parse failure falls back to splitting the raw string on `://` and `/`
/// so a label is always produced — share intents deliver malformed strings
/// and this must never fail.
pub fn extract_domain(raw: &str) -> String {
    match Url::parse(&normalize(raw)) {
        Ok(u) => {
            let host = u.host_str().unwrap_or_default().to_ascii_lowercase();
            strip_www(&host).to_string()
        }
        Err(_) => {
            let rest = match raw.split_once("://") {
                Some((_, rest)) => rest,
                None => raw,
            };
            let label = rest.split('/').next().unwrap_or_default().trim();
            strip_www(&label.to_ascii_lowercase()).to_string()
        }
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
