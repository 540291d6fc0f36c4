//! Linkstash — a personal link-bookmarking core.
//!
//! Captures URLs from share sheets, deep links, and manual entry, enriches
//! them asynchronously with fetched page metadata, and keeps the collection
//! consistent and persisted under concurrent mutation.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod bridges;
pub mod platform;
pub mod services;
pub mod storage;
pub mod store;
pub mod types;
