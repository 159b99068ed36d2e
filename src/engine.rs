//! Network engine
//!
//! Fetches input from a [`GraphSource`], then runs the analysis stages over it.
//! All fetches finish (or fail) before any analysis starts, so a failed or
//! timed-out fetch never produces a partial graph.

use crate::analysis::assemble;
use crate::config::EngineConfig;
use crate::network::UserNetworkGraph;
use crate::source::{GraphSource, NetworkFilter, SourceError};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors returned by [`NetworkEngine`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The source failed or timed out; no graph was computed
    #[error("Data retrieval failed: {0}")]
    DataRetrieval(#[from] SourceError),

    /// The request parameters are out of range
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Builds user network graphs from a shared source.
///
/// The engine keeps no per-request state, so one instance can serve concurrent
/// requests behind an `Arc`.
pub struct NetworkEngine {
    source: Arc<dyn GraphSource>,
    config: EngineConfig,
}

impl NetworkEngine {
    /// Create an engine with the default configuration
    pub fn new(source: Arc<dyn GraphSource>) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    pub fn with_config(source: Arc<dyn GraphSource>, config: EngineConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a graph with the configured thresholds
    pub async fn build_with_defaults(&self, filter: &NetworkFilter) -> NetworkResult<UserNetworkGraph> {
        self.build_user_network_graph(filter, self.config.min_shared_sessions, self.config.min_content_overlap)
            .await
    }

    /// Build the user network graph for a filter.
    ///
    /// Returns a well-formed empty graph when the source has no qualifying users.
    pub async fn build_user_network_graph(
        &self,
        filter: &NetworkFilter,
        min_shared_sessions: u32,
        min_content_overlap: f64,
    ) -> NetworkResult<UserNetworkGraph> {
        let started = Instant::now();
        validate_request(min_shared_sessions, min_content_overlap)?;

        let nodes = self.fetch("user nodes", self.source.user_nodes(filter)).await?;
        let edges = if nodes.is_empty() {
            Vec::new()
        } else {
            self.fetch("shared session edges", self.source.shared_session_edges(filter, min_shared_sessions))
                .await?
        };
        let event_count = self.fetch("event count", self.source.event_count(filter)).await?;

        debug!(
            "Fetched {} nodes, {} edges, {} events in {:?}",
            nodes.len(),
            edges.len(),
            event_count,
            started.elapsed()
        );

        let graph = assemble(
            nodes,
            edges,
            filter,
            min_shared_sessions,
            min_content_overlap,
            event_count,
            started,
        );

        info!(
            "Built user network {}: {} users, {} connections, {} clusters ({}) in {}ms",
            graph.metadata.query_hash,
            graph.summary.total_users,
            graph.summary.total_connections,
            graph.summary.total_clusters,
            graph.summary.network_type,
            graph.metadata.query_time_ms
        );
        Ok(graph)
    }

    /// Await one source call, bounded by the configured timeout
    async fn fetch<T, F>(&self, stage: &'static str, call: F) -> NetworkResult<T>
    where
        F: Future<Output = Result<T, SourceError>>,
    {
        let timeout = self.config.query_timeout();
        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("Failed to fetch {}: {}", stage, e);
                Err(NetworkError::DataRetrieval(e))
            }
            Err(_) => {
                error!("Fetching {} timed out after {:?}", stage, timeout);
                Err(NetworkError::DataRetrieval(SourceError::Timeout {
                    stage,
                    timeout_ms: self.config.query_timeout_ms,
                }))
            }
        }
    }
}

fn validate_request(min_shared_sessions: u32, min_content_overlap: f64) -> NetworkResult<()> {
    if min_shared_sessions == 0 {
        return Err(NetworkError::InvalidRequest(
            "min_shared_sessions must be at least 1".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&min_content_overlap) {
        return Err(NetworkError::InvalidRequest(format!(
            "min_content_overlap must be within [0, 1], got {}",
            min_content_overlap
        )));
    }
    Ok(())
}
