//! Linkstash — a personal link-bookmarking core.
//!
//! Entry point: runs an interactive console demo walking through ingestion,
//! enrichment, queries, and settings against a temporary state file.

use std::sync::Arc;

use linkstash::bridges::{deep_link, share_intent};
use linkstash::services::{link_queries, url_norm};
use linkstash::storage::json_file::JsonFileStore;
use linkstash::storage::MemoryStore;
use linkstash::store::LinkStore;
use linkstash::types::link::LinkPatch;
use linkstash::types::settings::{SettingsPatch, ThemeMode};
use linkstash::services::meta_fetcher::{HttpMetaFetcher, DEFAULT_FETCH_TIMEOUT};

#[tokio::main]
async fn main() {
    println!();
    println!("Linkstash v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_url_tools();
    demo_store().await;
    demo_persistence();

    println!();
    println!("Done.");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_url_tools() {
    section("URL normalization");
    for raw in ["example.com", "www.Example.com/Path", "localhost", "https://a.co/x"] {
        println!(
            "  {:28} -> normalize: {:32} domain: {:14} acceptable: {}",
            raw,
            url_norm::normalize(raw),
            url_norm::extract_domain(raw),
            url_norm::is_acceptable(raw),
        );
    }
}

async fn demo_store() {
    section("Link store");

    let fetcher = match HttpMetaFetcher::new(DEFAULT_FETCH_TIMEOUT) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("  fetcher init failed: {}", e);
            return;
        }
    };
    let store = match LinkStore::open(fetcher, MemoryStore::new()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("  store init failed: {}", e);
            return;
        }
    };

    // Manual entry with a user title (locked), share intent, deep link.
    let manual = store.add("rust-lang.org", Some("The Rust language"), true);
    share_intent::handle_share_intent(
        &store,
        &share_intent::SharePayload {
            web_url: Some("https://blog.rust-lang.org/some-post".to_string()),
            text: None,
            title: None,
        },
    );
    deep_link::handle_deep_link(&store, "linkstash://add?url=docs.rs/serde");
    deep_link::handle_deep_link(&store, "linkstash://open?nope"); // logged, ignored

    println!("  {} links saved", store.len());
    for summary in link_queries::domain_summaries(&store.snapshot()) {
        println!("    {} ({})", summary.domain, summary.count);
    }

    // Edit the manual link's URL; the caller recomputes the domain.
    let new_url = url_norm::normalize("https://www.rust-lang.org/learn");
    store.update(
        &manual,
        &LinkPatch {
            domain: Some(url_norm::extract_domain(&new_url)),
            url: Some(new_url),
            ..Default::default()
        },
    );
    if let Some(record) = store.get(&manual) {
        println!("  edited: {} ({})", record.url, record.domain);
    }

    store.update_settings(&SettingsPatch {
        theme: Some(ThemeMode::Dark),
        ..Default::default()
    });
    println!("  settings: {:?}", store.settings());
}

fn demo_persistence() {
    section("Persistence");
    let dir = std::env::temp_dir().join("linkstash-demo");
    let storage = JsonFileStore::new(Some(dir.join("state.json")));
    println!("  state file: {}", storage.path().display());
}
