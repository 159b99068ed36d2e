//! Watchnet: social viewing network engine
//!
//! Turns "who watched what, when, from where" facts from a media server into a
//! labeled graph of users, detects viewing communities and classifies the
//! overall network topology.
//!
//! # Architecture
//!
//! - [`source`]: the [`GraphSource`] trait that supplies nodes, edges and the
//!   event count, plus an in-memory implementation
//! - [`analysis`]: cluster detection, node annotation, summary and metadata,
//!   all synchronous and side-effect free
//! - [`engine`]: fetches input with timeouts, then runs the analysis
//! - [`network`]: the serializable result model
//!
//! Graph algorithms (connected components, density) live in the
//! `watchnet-graph-algorithms` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use watchnet::{ConnectionType, InMemorySource, NetworkEngine, NetworkFilter, UserEdge, UserNode};
//! use chrono::Utc;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let now = Utc::now();
//!     let mut source = InMemorySource::new();
//!     source.add_node(UserNode::new("1", "Alice", 40, 20.0, now));
//!     source.add_node(UserNode::new("2", "Bob", 12, 6.5, now));
//!     source.add_edge(UserEdge::new("1", "2", ConnectionType::SharedSession, 3, vec![], now, now));
//!
//!     let engine = NetworkEngine::new(Arc::new(source));
//!     let graph = engine
//!         .build_user_network_graph(&NetworkFilter::new(), 2, 0.0)
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(graph.clusters.len(), 1);
//!     assert_eq!(graph.metadata.query_hash.len(), 16);
//! }
//! ```

#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod engine;
pub mod network;
pub mod source;

// Re-export main types for convenience
pub use network::{
    ClusterKind, ConnectionType, NetworkMetadata, NetworkSummary, NetworkType, UserCluster,
    UserEdge, UserId, UserNetworkGraph, UserNode,
};

pub use analysis::{annotate_nodes, build_metadata, detect_clusters, determine_network_type, summarize};

pub use source::{GraphSource, InMemorySource, NetworkFilter, SourceError, SourceResult};

pub use config::{ConfigError, ConfigResult, EngineConfig, SourceLimits};

pub use engine::{NetworkEngine, NetworkError, NetworkResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
