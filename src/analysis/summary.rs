//! Network summary and topology classification

use crate::network::{ConnectionType, NetworkSummary, NetworkType, UserCluster, UserEdge, UserNode};
use tracing::debug;
use watchnet_graph_algorithms::possible_pairs;

/// A hub has more than this many times the average connection count.
///
/// Empirically chosen; kept for compatibility with existing dashboards.
pub const CENTRALIZATION_FACTOR: f64 = 3.0;

/// A network is fragmented when it has more than `users / FRAGMENTATION_DIVISOR`
/// clusters (integer division).
pub const FRAGMENTATION_DIVISOR: usize = 3;

/// Network density above which a network is a distributed mesh
pub const DISTRIBUTED_DENSITY: f64 = 0.3;

/// Compute graph-wide statistics over annotated nodes.
pub fn summarize(nodes: &[UserNode], edges: &[UserEdge], clusters: &[UserCluster]) -> NetworkSummary {
    let mut summary = NetworkSummary {
        total_users: nodes.len(),
        total_connections: edges.len(),
        total_clusters: clusters.len(),
        largest_cluster_size: clusters.first().map_or(0, |c| c.user_count),
        ..NetworkSummary::default()
    };

    if nodes.is_empty() {
        summary.network_type = NetworkType::Empty;
        return summary;
    }

    let possible = possible_pairs(nodes.len());
    if possible > 0 {
        summary.network_density = edges.len() as f64 / possible as f64;
    }

    let mut total_degree = 0usize;
    for node in nodes {
        total_degree += node.connection_count;
        // Strict comparison: ties go to the first node seen
        if node.connection_count > summary.max_connections_count {
            summary.max_connections_count = node.connection_count;
            summary.max_connections_user = Some(node.display_name.clone());
        }
        if node.is_isolated() {
            summary.isolated_users += 1;
        }
    }
    summary.avg_connections_per_user = total_degree as f64 / nodes.len() as f64;

    for edge in edges {
        let sessions = u64::from(edge.shared_session_count);
        match edge.connection_type {
            ConnectionType::WatchParty => summary.watch_party_count += sessions,
            ConnectionType::SharedSession => summary.shared_session_count += sessions,
        }
    }

    summary.network_type = determine_network_type(&summary);
    debug!(
        "Network summary: {} users, {} connections, {} clusters, type {}",
        summary.total_users, summary.total_connections, summary.total_clusters, summary.network_type
    );
    summary
}

/// Classify the overall topology. Rules are checked in order.
///
/// 1. no connections: fragmented
/// 2. a hub above [`CENTRALIZATION_FACTOR`] times the average: centralized
/// 3. more clusters than a third of the users: fragmented
/// 4. density above [`DISTRIBUTED_DENSITY`]: distributed
/// 5. otherwise: hierarchical
pub fn determine_network_type(summary: &NetworkSummary) -> NetworkType {
    if summary.total_connections == 0 {
        return NetworkType::Fragmented;
    }

    if summary.max_connections_count as f64 > summary.avg_connections_per_user * CENTRALIZATION_FACTOR {
        return NetworkType::Centralized;
    }

    if summary.total_clusters > summary.total_users / FRAGMENTATION_DIVISOR {
        return NetworkType::Fragmented;
    }

    if summary.network_density > DISTRIBUTED_DENSITY {
        return NetworkType::Distributed;
    }

    NetworkType::Hierarchical
}
