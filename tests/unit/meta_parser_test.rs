//! Unit tests for the HTML metadata extractor.
//!
//! Extraction is pattern matching over raw markup, so these tests feed it
//! the kinds of HTML real pages ship: attribute orders swapped, mixed
//! casing, single quotes, entities, and outright broken documents.

use linkstash::services::meta_fetcher::parse_meta_from_html;

const PAGE_URL: &str = "https://example.com/article/42";

#[test]
fn test_og_tags_win() {
    let html = r#"
        <html><head>
        <title>Doc Title</title>
        <meta property="og:title" content="OG Title">
        <meta property="og:description" content="OG Desc">
        <meta property="og:image" content="https://cdn.example.com/a.png">
        <meta property="og:site_name" content="Example">
        <meta name="twitter:title" content="TW Title">
        </head></html>
    "#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.title.as_deref(), Some("OG Title"));
    assert_eq!(meta.description.as_deref(), Some("OG Desc"));
    assert_eq!(meta.image.as_deref(), Some("https://cdn.example.com/a.png"));
    assert_eq!(meta.site_name.as_deref(), Some("Example"));
}

#[test]
fn test_twitter_fallback_then_document_title() {
    let html = r#"
        <title>Doc Title</title>
        <meta name="twitter:title" content="TW Title">
    "#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.title.as_deref(), Some("TW Title"));

    let html = "<html><head><title>  Doc Title  </title></head></html>";
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.title.as_deref(), Some("Doc Title"));
}

#[test]
fn test_description_chain() {
    let html = r#"<meta name="description" content="Generic desc">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.description.as_deref(), Some("Generic desc"));

    let html = r#"<meta name="twitter:description" content="TW desc">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.description.as_deref(), Some("TW desc"));
}

#[test]
fn test_entity_decoding() {
    let html = r#"<meta property="og:title" content="Hello &amp; World">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.title.as_deref(), Some("Hello & World"));

    let html = r#"<title>&lt;b&gt;Bold&lt;/b&gt; &quot;q&quot; &#39;s&#39;</title>"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.title.as_deref(), Some("<b>Bold</b> \"q\" 's'"));
}

#[test]
fn test_relative_image_resolved_against_page_url() {
    let html = r#"<meta property="og:image" content="/img/cover.jpg">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(
        meta.image.as_deref(),
        Some("https://example.com/img/cover.jpg")
    );

    // Relative to the page's directory
    let html = r#"<meta property="og:image" content="cover.jpg">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(
        meta.image.as_deref(),
        Some("https://example.com/article/cover.jpg")
    );

    // Protocol-relative
    let html = r#"<meta property="og:image" content="//cdn.example.com/c.png">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.image.as_deref(), Some("https://cdn.example.com/c.png"));
}

#[test]
fn test_unresolvable_image_becomes_none() {
    // The page URL itself won't parse, so the reference can't be resolved.
    let html = r#"<meta property="og:image" content="/img/x.png">"#;
    let meta = parse_meta_from_html(html, "http://bad host/page");
    assert_eq!(meta.image, None);
}

#[test]
fn test_image_fallback_chain() {
    let html = r#"<meta name="twitter:image" content="https://t.example.com/i.png">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.image.as_deref(), Some("https://t.example.com/i.png"));

    let html = r#"<meta name="twitter:image:src" content="https://t.example.com/s.png">"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.image.as_deref(), Some("https://t.example.com/s.png"));
}

/// Attribute order and casing don't matter, and single quotes work.
#[test]
fn test_mangled_but_recognizable_markup() {
    let html = r#"<META CONTENT='Swapped' PROPERTY='og:title' data-x=1>"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.title.as_deref(), Some("Swapped"));

    // Unclosed tags elsewhere don't break the matching substring.
    let html = r#"<div><p>broken<meta property="og:site_name" content="Site"><span>"#;
    let meta = parse_meta_from_html(html, PAGE_URL);
    assert_eq!(meta.site_name.as_deref(), Some("Site"));
}

#[test]
fn test_empty_page_yields_all_none() {
    let meta = parse_meta_from_html("", PAGE_URL);
    assert!(meta.is_empty());

    let meta = parse_meta_from_html("<html><body>plain text</body></html>", PAGE_URL);
    assert!(meta.is_empty());
}
