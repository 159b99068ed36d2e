//! Cluster detection
//!
//! Partitions users into connected components, measures each component's
//! density and labels it.

use super::build_view;
use crate::network::{UserCluster, UserEdge, UserNode};
use tracing::debug;
use watchnet_graph_algorithms::{component_edge_counts, connected_components, pair_density};

/// Detect clusters of connected users.
///
/// Cluster ids and colors follow discovery order (traversal starts from nodes
/// in input order); the returned list is stably sorted by descending size.
/// Edges whose endpoints are not both known users are ignored.
pub fn detect_clusters(nodes: &[UserNode], edges: &[UserEdge]) -> Vec<UserCluster> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let view = build_view(nodes, edges);
    let components = connected_components(&view.graph);
    let intra_edges = component_edge_counts(&view.graph, &components);

    let mut clusters: Vec<UserCluster> = components
        .components
        .iter()
        .enumerate()
        .map(|(id, members)| {
            let member_ids = members
                .iter()
                .filter_map(|&idx| view.user_at(idx).cloned())
                .collect::<Vec<_>>();
            let density = pair_density(member_ids.len(), intra_edges[id]);
            UserCluster::new(id, member_ids, density)
        })
        .collect();

    // sort_by is stable, so equal sizes keep discovery order
    clusters.sort_by(|a, b| b.user_count.cmp(&a.user_count));

    debug!(
        "Detected {} clusters, largest has {} users",
        clusters.len(),
        components.largest()
    );
    clusters
}
