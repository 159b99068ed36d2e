//! Graph-wide statistics

use super::types::NetworkType;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one network graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub total_users: usize,
    pub total_connections: usize,
    pub total_clusters: usize,
    /// Users with no connections
    pub isolated_users: usize,
    pub largest_cluster_size: usize,

    /// Connections over possible user pairs, 0 with fewer than two users.
    ///
    /// Not capped: a pair joined by both connection types counts twice.
    pub network_density: f64,
    pub avg_connections_per_user: f64,

    /// Display name of the most connected user (the hub), if any user has a connection
    pub max_connections_user: Option<String>,
    pub max_connections_count: usize,

    /// Sessions summed over shared-session edges
    pub shared_session_count: u64,
    /// Sessions summed over watch-party edges
    pub watch_party_count: u64,

    pub network_type: NetworkType,
}
