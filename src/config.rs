//! Engine configuration
//!
//! Loaded from YAML; every field has a default so a partial file is valid.
//!
//! ```yaml
//! min_shared_sessions: 3
//! query_timeout_ms: 5000
//! limits:
//!   max_nodes: 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Caps and thresholds a graph source applies before the engine runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLimits {
    /// Maximum number of user nodes
    pub max_nodes: usize,
    /// Maximum number of edges
    pub max_edges: usize,
    /// Minimum playback events for a user to become a node
    pub min_node_events: u64,
}

impl Default for SourceLimits {
    fn default() -> Self {
        Self {
            max_nodes: 100,
            max_edges: 500,
            min_node_events: 3,
        }
    }
}

/// Network engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default minimum number of shared sessions for an edge
    pub min_shared_sessions: u32,
    /// Default minimum content overlap, recorded in metadata
    pub min_content_overlap: f64,
    /// Timeout for each source fetch in milliseconds
    pub query_timeout_ms: u64,
    /// Source caps
    pub limits: SourceLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_shared_sessions: 2,
            min_content_overlap: 0.0,
            query_timeout_ms: 30_000,
            limits: SourceLimits::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_shared_sessions == 0 {
            return Err(ConfigError::Invalid(
                "min_shared_sessions must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_content_overlap) {
            return Err(ConfigError::Invalid(format!(
                "min_content_overlap must be within [0, 1], got {}",
                self.min_content_overlap
            )));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "query_timeout_ms must be positive".to_string(),
            ));
        }
        if self.limits.max_nodes == 0 {
            return Err(ConfigError::Invalid("limits.max_nodes must be positive".to_string()));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
