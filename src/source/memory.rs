//! In-process graph source over pre-aggregated rows

use super::{GraphSource, NetworkFilter, SourceResult};
use crate::config::SourceLimits;
use crate::network::{ConnectionType, UserEdge, UserId, UserNode};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Graph source that holds per-user and per-pair aggregates in memory.
///
/// Applies the same rules an event-store adapter does: user list and date
/// range filtering, the activity threshold, the minimum session count,
/// ordering and caps. Rows carry no media type, so `media_types` is not
/// applied.
///
/// A user row only records its latest activity, so users are filtered by the
/// start of the date range alone: a user last active after `end_date` may
/// still have watched inside the range. Edges carry both interaction bounds
/// and are filtered against the whole range.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    nodes: Vec<UserNode>,
    edges: Vec<UserEdge>,
    event_count: Option<u64>,
    limits: SourceLimits,
}

impl InMemorySource {
    /// Create an empty source with default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn from_parts(nodes: Vec<UserNode>, edges: Vec<UserEdge>, limits: SourceLimits) -> Self {
        Self {
            nodes,
            edges: edges.into_iter().map(normalize_edge).collect(),
            event_count: None,
            limits,
        }
    }

    pub fn add_node(&mut self, node: UserNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: UserEdge) {
        self.edges.push(normalize_edge(edge));
    }

    /// Report a fixed event count instead of deriving it from the nodes
    pub fn set_event_count(&mut self, count: u64) {
        self.event_count = Some(count);
    }

    pub fn limits(&self) -> &SourceLimits {
        &self.limits
    }

    fn node_in_range(filter: &NetworkFilter, node: &UserNode) -> bool {
        filter.includes_user(node.id.as_str())
            && filter.start_date.map_or(true, |start| node.last_active_at >= start)
    }
}

/// Rebuild an edge so that endpoint order and derived fields hold for rows
/// that did not come through [`UserEdge::new`], such as deserialized ones.
fn normalize_edge(edge: UserEdge) -> UserEdge {
    UserEdge::new(
        edge.source_id,
        edge.target_id,
        edge.connection_type,
        edge.shared_session_count,
        edge.top_shared_content,
        edge.first_interaction_at,
        edge.last_interaction_at,
    )
}

#[async_trait]
impl GraphSource for InMemorySource {
    async fn user_nodes(&self, filter: &NetworkFilter) -> SourceResult<Vec<UserNode>> {
        let mut nodes: Vec<UserNode> = self
            .nodes
            .iter()
            .filter(|n| Self::node_in_range(filter, n))
            .filter(|n| n.playback_count >= self.limits.min_node_events)
            .map(|n| {
                // Derived fields are recomputed by the analysis stages
                UserNode::new(
                    n.id.clone(),
                    n.display_name.clone(),
                    n.playback_count,
                    n.total_watch_hours,
                    n.last_active_at,
                )
            })
            .collect();

        nodes.sort_by(|a, b| b.playback_count.cmp(&a.playback_count));
        nodes.truncate(self.limits.max_nodes);

        debug!("In-memory source returned {} of {} nodes", nodes.len(), self.nodes.len());
        Ok(nodes)
    }

    async fn shared_session_edges(
        &self,
        filter: &NetworkFilter,
        min_shared_sessions: u32,
    ) -> SourceResult<Vec<UserEdge>> {
        let mut seen: HashSet<(UserId, UserId, ConnectionType)> = HashSet::new();
        let mut edges: Vec<UserEdge> = Vec::new();

        for edge in &self.edges {
            if edge.shared_session_count < min_shared_sessions
                || !filter.includes_user(edge.source_id.as_str())
                || !filter.includes_user(edge.target_id.as_str())
                || !filter.overlaps(edge.first_interaction_at, edge.last_interaction_at)
            {
                continue;
            }
            let key = (
                edge.source_id.clone(),
                edge.target_id.clone(),
                edge.connection_type,
            );
            if seen.insert(key) {
                edges.push(edge.clone());
            }
        }

        edges.sort_by(|a, b| b.shared_session_count.cmp(&a.shared_session_count));
        edges.truncate(self.limits.max_edges);

        debug!("In-memory source returned {} of {} edges", edges.len(), self.edges.len());
        Ok(edges)
    }

    async fn event_count(&self, filter: &NetworkFilter) -> SourceResult<u64> {
        if let Some(count) = self.event_count {
            return Ok(count);
        }
        Ok(self
            .nodes
            .iter()
            .filter(|n| Self::node_in_range(filter, n))
            .map(|n| n.playback_count)
            .sum())
    }
}
