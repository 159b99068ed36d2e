//! Viewing network data model
//!
//! Users are nodes, co-viewing relationships are undirected edges, and
//! connected groups of users are clusters. Clusters refer to users by id only.

pub mod cluster;
pub mod edge;
pub mod graph;
pub mod metadata;
pub mod node;
pub mod summary;
pub mod types;

// Re-export main types
pub use cluster::{cluster_color, UserCluster, CLUSTER_PALETTE};
pub use edge::{edge_width, UserEdge, MAX_TOP_CONTENT};
pub use graph::UserNetworkGraph;
pub use metadata::{NetworkMetadata, CLUSTERING_ALGORITHM};
pub use node::{node_size, UserNode, DEFAULT_NODE_COLOR};
pub use summary::NetworkSummary;
pub use types::{ClusterKind, ConnectionType, NetworkType, UserId};
