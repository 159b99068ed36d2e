//! User node of the viewing network

use super::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color of a node that has not been assigned to a cluster
pub const DEFAULT_NODE_COLOR: &str = "#6b7280";
/// Smallest display size of a node
pub const MIN_NODE_SIZE: f64 = 10.0;
/// Largest display size of a node
pub const MAX_NODE_SIZE: f64 = 50.0;

/// A user in the viewing network
///
/// The activity fields come from the event store. `connection_count`,
/// `cluster_id` and `color` are filled in by the node annotator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNode {
    /// Stable user identifier
    pub id: UserId,

    /// Name shown to people
    pub display_name: String,

    /// Number of qualifying playback events
    pub playback_count: u64,

    /// Total watch time in hours
    pub total_watch_hours: f64,

    /// Most recent playback
    pub last_active_at: DateTime<Utc>,

    /// Number of edges incident to this node
    pub connection_count: usize,

    /// Cluster this node belongs to, once detected
    pub cluster_id: Option<usize>,

    /// Display color, inherited from the cluster
    pub color: String,

    /// Display size hint derived from `playback_count`
    pub size: f64,
}

impl UserNode {
    pub fn new(
        id: impl Into<UserId>,
        display_name: impl Into<String>,
        playback_count: u64,
        total_watch_hours: f64,
        last_active_at: DateTime<Utc>,
    ) -> Self {
        UserNode {
            id: id.into(),
            display_name: display_name.into(),
            playback_count,
            total_watch_hours: total_watch_hours.max(0.0),
            last_active_at,
            connection_count: 0,
            cluster_id: None,
            color: DEFAULT_NODE_COLOR.to_string(),
            size: node_size(playback_count),
        }
    }

    /// Whether the node has no incident edges
    pub fn is_isolated(&self) -> bool {
        self.connection_count == 0
    }
}

/// Display size for a playback count: 10 plus one step per ten plays, capped at 50
pub fn node_size(playback_count: u64) -> f64 {
    (MIN_NODE_SIZE + playback_count as f64 / 10.0).clamp(MIN_NODE_SIZE, MAX_NODE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_defaults() {
        let node = UserNode::new("u1", "Alice", 25, 12.5, Utc::now());

        assert_eq!(node.id.as_str(), "u1");
        assert_eq!(node.connection_count, 0);
        assert_eq!(node.cluster_id, None);
        assert_eq!(node.color, DEFAULT_NODE_COLOR);
        assert_eq!(node.size, 12.5);
        assert!(node.is_isolated());
    }

    #[test]
    fn test_node_size_is_bounded_and_monotonic() {
        assert_eq!(node_size(0), MIN_NODE_SIZE);
        assert_eq!(node_size(100), 20.0);
        assert_eq!(node_size(400), MAX_NODE_SIZE);
        assert_eq!(node_size(10_000), MAX_NODE_SIZE);

        let mut previous = node_size(0);
        for count in (0..1000).step_by(7) {
            let size = node_size(count);
            assert!(size >= previous);
            previous = size;
        }
    }
}
