//! Property-based tests for URL normalization and domain extraction.
//!
//! These functions sit on the path of raw share-intent text, so they must
//! be total: any string in, a usable answer out, no panics.

use linkstash::services::url_norm::{extract_domain, is_acceptable, normalize};
use proptest::prelude::*;

proptest! {
    // Normalizing twice is the same as normalizing once, for any input.
    #[test]
    fn normalize_is_idempotent(raw in ".{0,120}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    // The output always carries an explicit scheme.
    #[test]
    fn normalize_always_schemed(raw in ".{0,120}") {
        let normalized = normalize(&raw).to_ascii_lowercase();
        prop_assert!(
            normalized.starts_with("http://") || normalized.starts_with("https://")
        );
    }

    // extract_domain never panics and never leaks a scheme or path
    // separator into the label.
    #[test]
    fn extract_domain_is_total_and_clean(raw in ".{0,120}") {
        let domain = extract_domain(&raw);
        prop_assert!(!domain.contains("://"));
        prop_assert!(!domain.contains('/'));
        prop_assert_eq!(domain.to_ascii_lowercase(), domain.clone());
    }

    // Normalization first changes nothing about the derived domain.
    #[test]
    fn extract_domain_agrees_with_normalized(
        host in "[a-z][a-z0-9-]{0,20}\\.[a-z]{2,6}",
        path in proptest::option::of("/[a-zA-Z0-9/_-]{0,20}"),
    ) {
        prop_assume!(!host.starts_with("www."));
        let raw = format!("{}{}", host, path.unwrap_or_default());
        prop_assert_eq!(extract_domain(&raw), extract_domain(&normalize(&raw)));
        prop_assert_eq!(extract_domain(&raw), host.clone());
        prop_assert!(is_acceptable(&raw));
    }

    // www. is always stripped, whatever the casing.
    #[test]
    fn extract_domain_strips_www(host in "[a-z][a-z0-9]{0,15}\\.[a-z]{2,4}") {
        prop_assert_eq!(extract_domain(&format!("www.{}", host)), host.clone());
        prop_assert_eq!(extract_domain(&format!("https://WWW.{}", host)), host);
    }
}
