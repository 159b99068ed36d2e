//! Assembled network graph returned to callers

use super::cluster::UserCluster;
use super::edge::UserEdge;
use super::metadata::NetworkMetadata;
use super::node::UserNode;
use super::summary::NetworkSummary;
use super::types::UserId;
use serde::{Deserialize, Serialize};

/// Nodes, edges, clusters, summary and metadata of one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNetworkGraph {
    pub nodes: Vec<UserNode>,
    pub edges: Vec<UserEdge>,
    /// Sorted by descending size
    pub clusters: Vec<UserCluster>,
    pub summary: NetworkSummary,
    pub metadata: NetworkMetadata,
}

impl UserNetworkGraph {
    /// Graph with no users
    pub fn empty(metadata: NetworkMetadata) -> Self {
        UserNetworkGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            clusters: Vec::new(),
            summary: NetworkSummary::default(),
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &UserId) -> Option<&UserNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Cluster containing the given user
    pub fn cluster_for_node(&self, id: &UserId) -> Option<&UserCluster> {
        self.clusters.iter().find(|c| c.contains(id))
    }
}
