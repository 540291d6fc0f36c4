//! Unit tests for the HTTP metadata fetcher.
//!
//! The fetch contract: one GET with a bounded timeout, non-2xx bodies are
//! still scanned, and every failure mode resolves to an all-`None` record —
//! ingestion must never fail visibly because a page was unreachable.

use std::time::Duration;

use linkstash::services::meta_fetcher::{HttpMetaFetcher, MetaFetcher};

fn fetcher() -> HttpMetaFetcher {
    HttpMetaFetcher::new(Duration::from_secs(5)).expect("client should build")
}

#[tokio::test]
async fn test_fetch_extracts_meta_from_page() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/page")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><head>
                <meta property="og:title" content="Fetched Title">
                <meta property="og:description" content="Fetched Desc">
                <meta property="og:image" content="/cover.png">
                <meta property="og:site_name" content="Mock Site">
            </head></html>"#,
        )
        .create_async()
        .await;

    let url = format!("{}/page", server.url());
    let meta = fetcher().fetch_meta(&url).await;

    assert_eq!(meta.title.as_deref(), Some("Fetched Title"));
    assert_eq!(meta.description.as_deref(), Some("Fetched Desc"));
    assert_eq!(meta.site_name.as_deref(), Some("Mock Site"));
    // Relative image resolved against the fetched URL
    assert_eq!(meta.image, Some(format!("{}/cover.png", server.url())));
}

/// A 404 is not a failure: whatever body came back is still scanned.
#[tokio::test]
async fn test_non_2xx_body_still_scanned() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/gone")
        .with_status(404)
        .with_body(r#"<meta property="og:title" content="Not Found Page">"#)
        .create_async()
        .await;

    let url = format!("{}/gone", server.url());
    let meta = fetcher().fetch_meta(&url).await;
    assert_eq!(meta.title.as_deref(), Some("Not Found Page"));
}

#[tokio::test]
async fn test_non_html_body_yields_all_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/data")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"not": "html"}"#)
        .create_async()
        .await;

    let url = format!("{}/data", server.url());
    let meta = fetcher().fetch_meta(&url).await;
    assert!(meta.is_empty());
}

/// Connection failures resolve, they never propagate.
#[tokio::test]
async fn test_unreachable_host_yields_all_none() {
    // Grab a local port that nothing is listening on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let url = format!("http://127.0.0.1:{}/page", port);
    let meta = fetcher().fetch_meta(&url).await;
    assert!(meta.is_empty());
}

/// A bare domain is normalized before fetching, so callers can pass raw
/// user input straight through.
#[tokio::test]
async fn test_unparseable_url_yields_all_none() {
    let meta = fetcher().fetch_meta("not a fetchable url").await;
    assert!(meta.is_empty());
}
