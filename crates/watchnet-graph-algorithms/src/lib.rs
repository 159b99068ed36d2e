//! Graph algorithms for the Watchnet viewing network engine
//!
//! All algorithms operate on a [`GraphView`]: a dense, index-based, undirected
//! view of the topology. Mapping domain identifiers to dense indices is the
//! caller's job.

pub mod common;
pub mod community;
pub mod topology;

pub use common::{GraphView, NodeIndex};
pub use community::{connected_components, ComponentResult};
pub use topology::{component_edge_counts, pair_density, possible_pairs};
