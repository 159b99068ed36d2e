//! Network analysis stages
//!
//! Turns fetched nodes and edges into a labeled network graph:
//! cluster detection, node annotation, summarisation and metadata.
//! The algorithms live in `watchnet-graph-algorithms`; this module adapts the
//! user-keyed data model to their dense index-based view.

pub mod annotate;
pub mod clusters;
pub mod metadata;
pub mod summary;

pub use annotate::annotate_nodes;
pub use clusters::detect_clusters;
pub use metadata::{build_metadata, query_hash};
pub use summary::{
    determine_network_type, summarize, CENTRALIZATION_FACTOR, DISTRIBUTED_DENSITY, FRAGMENTATION_DIVISOR,
};

use crate::network::{UserEdge, UserId, UserNetworkGraph, UserNode};
use crate::source::NetworkFilter;
use indexmap::IndexMap;
use std::time::Instant;
use tracing::{debug, warn};
use watchnet_graph_algorithms::GraphView;

/// Dense view of the user network plus the id mapping used to build it
pub struct NetworkView {
    /// Undirected topology over dense indices
    pub graph: GraphView,
    /// User id to dense index, in node order
    pub index: IndexMap<UserId, usize>,
    /// Edges dropped because an endpoint is not a known node or both endpoints match
    pub skipped_edges: usize,
}

impl NetworkView {
    pub fn user_at(&self, idx: usize) -> Option<&UserId> {
        self.index.get_index(idx).map(|(id, _)| id)
    }
}

/// Build a [`NetworkView`] for algorithm execution
pub fn build_view(nodes: &[UserNode], edges: &[UserEdge]) -> NetworkView {
    let mut index = IndexMap::with_capacity(nodes.len());
    for node in nodes {
        let next = index.len();
        if *index.entry(node.id.clone()).or_insert(next) != next {
            warn!("Duplicate user node {} ignored", node.id);
        }
    }

    let mut skipped_edges = 0;
    let mut pairs = Vec::with_capacity(edges.len());
    for edge in edges {
        match (index.get(&edge.source_id), index.get(&edge.target_id)) {
            (Some(&u), Some(&v)) if u != v => pairs.push((u, v)),
            _ => {
                warn!(
                    "Skipping edge {} -> {}: endpoint is not a distinct known user",
                    edge.source_id, edge.target_id
                );
                skipped_edges += 1;
            }
        }
    }

    let graph = GraphView::from_edges(index.len(), pairs);
    debug!(
        "Built network view: {} users, {} distinct pairs, {} skipped edges",
        graph.node_count,
        graph.pair_count(),
        skipped_edges
    );

    NetworkView {
        graph,
        index,
        skipped_edges,
    }
}

/// Run every analysis stage over fetched input.
///
/// Pure computation: nothing here performs I/O or touches shared state.
pub fn assemble(
    mut nodes: Vec<UserNode>,
    edges: Vec<UserEdge>,
    filter: &NetworkFilter,
    min_shared_sessions: u32,
    min_content_overlap: f64,
    event_count: u64,
    started: Instant,
) -> UserNetworkGraph {
    if nodes.is_empty() {
        let metadata = build_metadata(filter, min_shared_sessions, min_content_overlap, event_count, started);
        return UserNetworkGraph::empty(metadata);
    }

    let clusters = detect_clusters(&nodes, &edges);
    annotate_nodes(&mut nodes, &edges, &clusters);
    let summary = summarize(&nodes, &edges, &clusters);
    let metadata = build_metadata(filter, min_shared_sessions, min_content_overlap, event_count, started);

    UserNetworkGraph {
        nodes,
        edges,
        clusters,
        summary,
        metadata,
    }
}
