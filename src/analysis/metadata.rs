//! Result metadata and query fingerprint

use crate::network::{NetworkMetadata, CLUSTERING_ALGORITHM};
use crate::source::NetworkFilter;
use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use std::time::Instant;

/// Deterministic 16-hex-character fingerprint of the thresholds and date range.
///
/// The canonical form is
/// `user_network|min_sessions=<n>|min_overlap=<x.xx>|[start=<rfc3339>|][end=<rfc3339>|]`,
/// hashed with SHA-256 and truncated to its first 8 bytes.
pub fn query_hash(filter: &NetworkFilter, min_shared_sessions: u32, min_content_overlap: f64) -> String {
    let mut canonical = format!(
        "user_network|min_sessions={}|min_overlap={:.2}|",
        min_shared_sessions, min_content_overlap
    );
    if let Some(start) = filter.start_date {
        canonical.push_str(&format!("start={}|", start.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }
    if let Some(end) = filter.end_date {
        canonical.push_str(&format!("end={}|", end.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
}

/// Build provenance metadata for a request that started at `started`.
pub fn build_metadata(
    filter: &NetworkFilter,
    min_shared_sessions: u32,
    min_content_overlap: f64,
    event_count: u64,
    started: Instant,
) -> NetworkMetadata {
    let now = Utc::now();
    let (data_range_start, data_range_end) = filter.data_range(now);

    NetworkMetadata {
        query_hash: query_hash(filter, min_shared_sessions, min_content_overlap),
        data_range_start,
        data_range_end,
        min_shared_sessions,
        min_content_overlap,
        clustering_algorithm: CLUSTERING_ALGORITHM.to_string(),
        event_count,
        generated_at: now,
        query_time_ms: started.elapsed().as_millis() as u64,
        cached: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    #[test]
    fn test_hash_is_deterministic() {
        let filter = NetworkFilter::new().with_start(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let first = query_hash(&filter, 3, 0.5);
        let second = query_hash(&filter.clone(), 3, 0.5);

        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_matches_canonical_form() {
        let expected = Sha256::digest(b"user_network|min_sessions=2|min_overlap=0.00|");
        let expected: String = expected[..8].iter().map(|b| format!("{:02x}", b)).collect();

        assert_eq!(query_hash(&NetworkFilter::new(), 2, 0.0), expected);

        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let filter = NetworkFilter::new().with_start(start).with_end(end);
        let expected = Sha256::digest(
            b"user_network|min_sessions=2|min_overlap=0.25|start=2024-01-01T00:00:00Z|end=2024-12-31T23:59:59Z|",
        );
        let expected: String = expected[..8].iter().map(|b| format!("{:02x}", b)).collect();

        assert_eq!(query_hash(&filter, 2, 0.25), expected);
    }

    #[test]
    fn test_hash_is_prefix_of_full_digest() {
        let full = format!("{:x}", Sha256::digest(b"user_network|min_sessions=4|min_overlap=0.10|"));

        assert_eq!(query_hash(&NetworkFilter::new(), 4, 0.1), full[..16]);
    }

    #[test]
    fn test_hash_changes_with_inputs() {
        let filter = NetworkFilter::new();
        let base = query_hash(&filter, 3, 0.0);

        assert_ne!(base, query_hash(&filter, 5, 0.0));
        assert_ne!(base, query_hash(&filter, 3, 0.5));
        assert_ne!(
            base,
            query_hash(&filter.clone().with_end(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()), 3, 0.0)
        );
    }

    #[test]
    fn test_build_metadata() {
        let started = Instant::now() - Duration::from_millis(25);
        let metadata = build_metadata(&NetworkFilter::new(), 2, 0.1, 0, started);

        assert_eq!(metadata.event_count, 0);
        assert_eq!(metadata.min_shared_sessions, 2);
        assert_eq!(metadata.clustering_algorithm, "connected_components");
        assert!(metadata.query_time_ms >= 25);
        assert!(!metadata.cached);
        assert!(metadata.data_range_start < metadata.data_range_end);
        assert_eq!(metadata.data_range_end, metadata.generated_at);
    }
}
