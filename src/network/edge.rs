//! Co-viewing edge between two users

use super::types::{ConnectionType, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most shared titles kept on an edge
pub const MAX_TOP_CONTENT: usize = 5;
/// Narrowest display width of an edge
pub const MIN_EDGE_WIDTH: f64 = 1.0;
/// Widest display width of an edge
pub const MAX_EDGE_WIDTH: f64 = 10.0;

/// An undirected co-viewing relationship
///
/// Stored with `source_id < target_id`. A pair of users may be joined by at
/// most one edge per [`ConnectionType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEdge {
    pub source_id: UserId,
    pub target_id: UserId,

    /// Same address (shared session) or different addresses (watch party)
    pub connection_type: ConnectionType,

    /// Number of sessions watched together, at least 1
    pub shared_session_count: u32,

    /// Titles watched together, most relevant first
    pub top_shared_content: Vec<String>,

    pub first_interaction_at: DateTime<Utc>,
    pub last_interaction_at: DateTime<Utc>,

    /// Equal to `shared_session_count`
    pub weight: f64,

    /// Display width derived from `weight`
    pub display_width: f64,
}

impl UserEdge {
    /// Create an edge, normalising endpoint order and truncating shared content.
    pub fn new(
        a: impl Into<UserId>,
        b: impl Into<UserId>,
        connection_type: ConnectionType,
        shared_session_count: u32,
        mut top_shared_content: Vec<String>,
        first_interaction_at: DateTime<Utc>,
        last_interaction_at: DateTime<Utc>,
    ) -> Self {
        let a = a.into();
        let b = b.into();
        let (source_id, target_id) = if a <= b { (a, b) } else { (b, a) };
        let shared_session_count = shared_session_count.max(1);
        top_shared_content.truncate(MAX_TOP_CONTENT);

        UserEdge {
            source_id,
            target_id,
            connection_type,
            shared_session_count,
            top_shared_content,
            first_interaction_at,
            last_interaction_at,
            weight: shared_session_count as f64,
            display_width: edge_width(shared_session_count),
        }
    }

    /// Whether `id` is one of the endpoints
    pub fn involves(&self, id: &UserId) -> bool {
        self.source_id == *id || self.target_id == *id
    }

    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// Display width: 1 plus one step per five sessions, capped at 10
pub fn edge_width(shared_session_count: u32) -> f64 {
    (MIN_EDGE_WIDTH + shared_session_count as f64 / 5.0).clamp(MIN_EDGE_WIDTH, MAX_EDGE_WIDTH)
}
