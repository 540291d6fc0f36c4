//! Metadata fetcher for Linkstash.
//!
//! Fetches a page's HTML with a bounded timeout and extracts title,
//! description, preview image, and site name from OpenGraph / Twitter-card
//! meta tags. Extraction is deliberately pattern matching over the raw
//! markup, not a DOM parse: share-targeted pages are frequently malformed
//! and a recognizable `<meta ... content="...">` substring must still work.

use std::future::Future;
use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::services::url_norm;
use crate::types::errors::FetchError;
use crate::types::meta::UrlMeta;

/// Default fetch timeout. Covers connect, redirect chain, and body read.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.8";
const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 14; Linkstash) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/119 Mobile Safari/537.36";

/// Seam between the link store and the network.
///
/// Implementations must be total: `fetch_meta` resolves to an all-`None`
/// record on any failure instead of erroring, so ingestion never fails
/// visibly because a page was unreachable.
pub trait MetaFetcher {
    fn fetch_meta(&self, url: &str) -> impl Future<Output = UrlMeta> + Send;
}

/// `MetaFetcher` backed by a reqwest client with a bounded timeout.
pub struct HttpMetaFetcher {
    client: reqwest::Client,
}

impl HttpMetaFetcher {
    /// Builds a fetcher with the given request timeout. The timeout doubles
    /// as the abort signal: an in-flight request past the deadline is
    /// cancelled and treated as a failed fetch.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches the page body. Non-2xx responses are not treated as errors;
    /// whatever body comes back is still scanned for meta tags.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url_norm::normalize(url))
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| FetchError::BodyRead(e.to_string()))
    }
}

impl MetaFetcher for HttpMetaFetcher {
    /// One-shot: fetch and parse metadata for a URL. Never fails — network
    /// errors, timeouts, and unreadable bodies all degrade to all-`None`.
    async fn fetch_meta(&self, url: &str) -> UrlMeta {
        match self.fetch_html(url).await {
            Ok(html) => parse_meta_from_html(&html, url),
            Err(_) => UrlMeta::default(),
        }
    }
}

/// Which meta-tag attribute carries the key we are matching on.
#[derive(Debug, Clone, Copy)]
enum MetaAttr {
    Property,
    Name,
}

impl MetaAttr {
    fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Property => "property",
            MetaAttr::Name => "name",
        }
    }
}

/// Parses OpenGraph / Twitter-card metadata out of raw HTML, with the
/// fallback chains the rest of the app relies on:
///
/// - title: `og:title` → `twitter:title` → `<title>`
/// - description: `og:description` → `description` → `twitter:description`
/// - image: `og:image` → `twitter:image` → `twitter:image:src`, resolved
///   to an absolute URL against the page URL
/// - site name: `og:site_name`
pub fn parse_meta_from_html(html: &str, page_url: &str) -> UrlMeta {
    let title = pick_meta(
        html,
        &[
            (MetaAttr::Property, "og:title"),
            (MetaAttr::Name, "twitter:title"),
        ],
    )
    .or_else(|| pick_title(html));

    let description = pick_meta(
        html,
        &[
            (MetaAttr::Property, "og:description"),
            (MetaAttr::Name, "description"),
            (MetaAttr::Name, "twitter:description"),
        ],
    );

    let image_raw = pick_meta(
        html,
        &[
            (MetaAttr::Property, "og:image"),
            (MetaAttr::Name, "twitter:image"),
            (MetaAttr::Name, "twitter:image:src"),
        ],
    );

    let site_name = pick_meta(html, &[(MetaAttr::Property, "og:site_name")]);

    let image = resolve_url_maybe(page_url, image_raw.as_deref());

    UrlMeta {
        title,
        description,
        image,
        site_name,
    }
}

/// Finds the first meta tag whose `property`/`name` attribute equals one of
/// the targets (case-insensitive, attribute order irrelevant) and returns
/// its decoded `content` value.
fn pick_meta(html: &str, targets: &[(MetaAttr, &str)]) -> Option<String> {
    for (attr, value) in targets {
        let tag_pattern = format!(
            r#"(?i)<meta[^>]+{}\s*=\s*["']{}["'][^>]*>"#,
            attr.as_str(),
            regex::escape(value)
        );
        let Ok(tag_re) = Regex::new(&tag_pattern) else {
            continue;
        };
        let Some(tag) = tag_re.find(html) else {
            continue;
        };

        let Ok(content_re) = Regex::new(r#"(?i)content\s*=\s*["']([^"']+)["']"#) else {
            continue;
        };
        if let Some(caps) = content_re.captures(tag.as_str()) {
            let content = caps[1].trim();
            if !content.is_empty() {
                return Some(decode_entities(content));
            }
        }
    }
    None
}

/// Extracts the document `<title>` text.
fn pick_title(html: &str) -> Option<String> {
    let re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").ok()?;
    let caps = re.captures(html)?;
    let text = caps[1].trim();
    if text.is_empty() {
        None
    } else {
        Some(decode_entities(text))
    }
}

/// Resolves a possibly-relative image reference against the page URL.
/// Unresolvable references become `None` rather than an error.
fn resolve_url_maybe(base: &str, candidate: Option<&str>) -> Option<String> {
    let candidate = candidate?;
    let base = Url::parse(&url_norm::normalize(base)).ok()?;
    base.join(candidate).ok().map(|u| u.to_string())
}

/// Decodes the five standard HTML entities. Anything fancier is left as-is.
fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
