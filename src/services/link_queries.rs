// Read-side helpers over a snapshot of the link collection.
// Grouping, filtering, and sorting are consumer computations — the store
// itself never orders or filters.

use crate::types::link::LinkRecord;

/// A domain with the number of links saved under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSummary {
    pub domain: String,
    pub count: usize,
}

/// Per-domain counts over a snapshot, sorted by count descending then
/// domain name ascending.
pub fn domain_summaries(links: &[LinkRecord]) -> Vec<DomainSummary> {
    let mut counts: Vec<DomainSummary> = Vec::new();
    for link in links {
        match counts.iter_mut().find(|s| s.domain == link.domain) {
            Some(summary) => summary.count += 1,
            None => counts.push(DomainSummary {
                domain: link.domain.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
    counts
}

/// Case-insensitive search across domain, url, title, and description.
/// An empty query returns the snapshot unchanged.
pub fn filter_links(links: &[LinkRecord], query: &str) -> Vec<LinkRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return links.to_vec();
    }
    links
        .iter()
        .filter(|l| {
            let hay = format!(
                "{} {} {} {}",
                l.domain,
                l.url,
                l.title.as_deref().unwrap_or_default(),
                l.description.as_deref().unwrap_or_default()
            )
            .to_lowercase();
            hay.contains(&q)
        })
        .cloned()
        .collect()
}

/// Links belonging to one domain, optionally narrowed by a search over
/// title, description, and url, newest first.
pub fn links_for_domain(links: &[LinkRecord], domain: &str, query: &str) -> Vec<LinkRecord> {
    let q = query.trim().to_lowercase();
    let mut result: Vec<LinkRecord> = links
        .iter()
        .filter(|l| l.domain == domain)
        .filter(|l| {
            if q.is_empty() {
                return true;
            }
            let hay = format!(
                "{} {} {}",
                l.title.as_deref().unwrap_or_default(),
                l.description.as_deref().unwrap_or_default(),
                l.url
            )
            .to_lowercase();
            hay.contains(&q)
        })
        .cloned()
        .collect();
    result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    result
}
