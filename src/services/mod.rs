// Linkstash stateless services: URL normalization, metadata fetching,
// and read-side query helpers over collection snapshots.

pub mod link_queries;
pub mod meta_fetcher;
pub mod url_norm;
