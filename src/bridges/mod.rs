// Ingestion bridges: the collaborators that funnel externally captured text
// into the store's single entry point. They pre-check acceptability and
// leave validation, normalization, and enrichment to the store.

pub mod deep_link;
pub mod share_intent;
