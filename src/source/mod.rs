//! Graph input sources
//!
//! A [`GraphSource`] supplies the user nodes, co-viewing edges and event count
//! a network is built from. Sources do all the I/O; the analysis stages never
//! see raw rows.
//!
//! Implemented by:
//! - `InMemorySource`: pre-aggregated rows held in process (tests, demos, embedding)

pub mod filter;
pub mod memory;

pub use filter::NetworkFilter;
pub use memory::InMemorySource;

use crate::network::{UserEdge, UserNode};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while retrieving graph input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The underlying query failed
    #[error("Query failed: {0}")]
    Query(String),

    /// The store could not be reached
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// A fetch did not finish within the configured timeout
    #[error("Fetching {stage} timed out after {timeout_ms}ms")]
    Timeout {
        stage: &'static str,
        timeout_ms: u64,
    },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplier of network input, already filtered and capped.
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Users meeting the activity threshold, most active first
    async fn user_nodes(&self, filter: &NetworkFilter) -> SourceResult<Vec<UserNode>>;

    /// Co-viewing edges with at least `min_shared_sessions` sessions, highest count first.
    ///
    /// Each unordered pair appears at most once per connection type.
    async fn shared_session_edges(
        &self,
        filter: &NetworkFilter,
        min_shared_sessions: u32,
    ) -> SourceResult<Vec<UserEdge>>;

    /// Number of playback events matching the filter
    async fn event_count(&self, filter: &NetworkFilter) -> SourceResult<u64>;
}
