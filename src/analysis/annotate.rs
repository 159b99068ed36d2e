//! Node annotation
//!
//! Fills in the derived fields of each node: connection count, cluster id,
//! color and size.

use crate::network::{node_size, UserCluster, UserEdge, UserId, UserNode};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Annotate nodes in place from the edge list and detected clusters.
///
/// `connection_count` counts incident edges, so a pair joined by both a shared
/// session and a watch party contributes two. A node that belongs to no
/// cluster keeps its default cluster id and color.
pub fn annotate_nodes(nodes: &mut [UserNode], edges: &[UserEdge], clusters: &[UserCluster]) {
    let mut counts: FxHashMap<UserId, usize> =
        nodes.iter().map(|node| (node.id.clone(), 0)).collect();
    for edge in edges {
        for endpoint in [&edge.source_id, &edge.target_id] {
            if let Some(count) = counts.get_mut(endpoint) {
                *count += 1;
            }
        }
    }

    let mut owner: FxHashMap<&UserId, &UserCluster> = FxHashMap::default();
    for cluster in clusters {
        for id in &cluster.member_ids {
            owner.insert(id, cluster);
        }
    }

    let mut unassigned = 0;
    for node in nodes.iter_mut() {
        node.connection_count = counts.get(&node.id).copied().unwrap_or(0);
        node.size = node_size(node.playback_count);

        match owner.get(&node.id) {
            Some(cluster) => {
                node.cluster_id = Some(cluster.id);
                node.color = cluster.color.clone();
            }
            None => unassigned += 1,
        }
    }

    if unassigned > 0 {
        warn!("{} nodes belong to no cluster", unassigned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::detect_clusters;
    use crate::network::{ConnectionType, DEFAULT_NODE_COLOR};
    use chrono::Utc;

    fn node(id: &str, plays: u64) -> UserNode {
        UserNode::new(id, id, plays, 1.0, Utc::now())
    }

    fn edge(a: &str, b: &str, kind: ConnectionType) -> UserEdge {
        let now = Utc::now();
        UserEdge::new(a, b, kind, 2, vec![], now, now)
    }

    #[test]
    fn test_connection_counts_match_incident_edges() {
        let mut nodes = vec![node("hub", 3), node("a", 3), node("b", 3), node("c", 3)];
        let edges = vec![
            edge("hub", "a", ConnectionType::SharedSession),
            edge("hub", "b", ConnectionType::SharedSession),
            edge("hub", "b", ConnectionType::WatchParty),
        ];
        let clusters = detect_clusters(&nodes, &edges);

        annotate_nodes(&mut nodes, &edges, &clusters);

        let counts: Vec<usize> = nodes.iter().map(|n| n.connection_count).collect();
        assert_eq!(counts, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_cluster_and_color_assignment() {
        let mut nodes = vec![node("a", 3), node("b", 3), node("c", 3)];
        let edges = vec![edge("b", "c", ConnectionType::SharedSession)];
        let clusters = detect_clusters(&nodes, &edges);

        annotate_nodes(&mut nodes, &edges, &clusters);

        for node in &nodes {
            let cluster = clusters.iter().find(|c| c.contains(&node.id)).unwrap();
            assert_eq!(node.cluster_id, Some(cluster.id));
            assert_eq!(node.color, cluster.color);
        }
        assert_eq!(nodes[1].cluster_id, nodes[2].cluster_id);
        assert_ne!(nodes[0].cluster_id, nodes[1].cluster_id);
    }

    #[test]
    fn test_node_outside_every_cluster_keeps_defaults() {
        let mut nodes = vec![node("a", 3), node("b", 3)];
        let clusters = detect_clusters(&nodes[..1], &[]);

        annotate_nodes(&mut nodes, &[], &clusters);

        assert_eq!(nodes[0].cluster_id, Some(0));
        assert_eq!(nodes[1].cluster_id, None);
        assert_eq!(nodes[1].color, DEFAULT_NODE_COLOR);
    }

    #[test]
    fn test_size_follows_playback_count() {
        let mut nodes = vec![node("light", 30), node("heavy", 900)];
        nodes[0].size = 0.0;

        annotate_nodes(&mut nodes, &[], &[]);

        assert_eq!(nodes[0].size, 13.0);
        assert_eq!(nodes[1].size, 50.0);
    }
}
