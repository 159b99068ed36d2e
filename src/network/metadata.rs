//! Provenance and cache key of a network graph

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the clustering method recorded in metadata
pub const CLUSTERING_ALGORITHM: &str = "connected_components";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetadata {
    /// 16 hex characters derived from the thresholds and date range
    pub query_hash: String,

    pub data_range_start: DateTime<Utc>,
    pub data_range_end: DateTime<Utc>,

    pub min_shared_sessions: u32,
    pub min_content_overlap: f64,

    pub clustering_algorithm: String,

    /// Playback events matching the filter
    pub event_count: u64,

    pub generated_at: DateTime<Utc>,
    pub query_time_ms: u64,

    /// Set only by a response cache, never by the engine
    pub cached: bool,
}
