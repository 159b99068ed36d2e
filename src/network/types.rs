//! Core type definitions for the viewing network

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a user node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// How two users came to share a viewing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Both users played from the same network address
    SharedSession,
    /// Users played the same content at the same time from different addresses
    WatchParty,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::SharedSession => "shared_session",
            ConnectionType::WatchParty => "watch_party",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-graph topology label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// No users at all
    #[default]
    Empty,
    /// Hub and spoke around one highly connected user
    Centralized,
    /// No connections, or many small groups
    Fragmented,
    /// Well connected mesh
    Distributed,
    Hierarchical,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Empty => "empty",
            NetworkType::Centralized => "centralized",
            NetworkType::Fragmented => "fragmented",
            NetworkType::Distributed => "distributed",
            NetworkType::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative label of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterKind {
    #[serde(rename = "Isolated")]
    Isolated,
    #[serde(rename = "Pair")]
    Pair,
    #[serde(rename = "Tight-knit Group")]
    TightKnitGroup,
    #[serde(rename = "Large Community")]
    LargeCommunity,
    #[serde(rename = "Social Group")]
    SocialGroup,
}

impl ClusterKind {
    /// Density above which a group of three or more is tight-knit
    pub const TIGHT_KNIT_DENSITY: f64 = 0.8;
    /// Member count above which a loose group is a large community
    pub const LARGE_COMMUNITY_SIZE: usize = 10;

    /// Label a cluster of `size` members. First matching rule wins.
    pub fn classify(size: usize, density: f64) -> Self {
        if size == 1 {
            ClusterKind::Isolated
        } else if size == 2 {
            ClusterKind::Pair
        } else if density > Self::TIGHT_KNIT_DENSITY {
            ClusterKind::TightKnitGroup
        } else if size > Self::LARGE_COMMUNITY_SIZE {
            ClusterKind::LargeCommunity
        } else {
            ClusterKind::SocialGroup
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterKind::Isolated => "Isolated",
            ClusterKind::Pair => "Pair",
            ClusterKind::TightKnitGroup => "Tight-knit Group",
            ClusterKind::LargeCommunity => "Large Community",
            ClusterKind::SocialGroup => "Social Group",
        }
    }
}

impl fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id() {
        let id = UserId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(format!("{}", id), "42");

        let id2: UserId = "alice".into();
        assert!(id < id2);
    }

    #[test]
    fn test_cluster_kind_rules() {
        assert_eq!(ClusterKind::classify(1, 0.0), ClusterKind::Isolated);
        assert_eq!(ClusterKind::classify(2, 1.0), ClusterKind::Pair);
        assert_eq!(ClusterKind::classify(5, 0.9), ClusterKind::TightKnitGroup);
        assert_eq!(ClusterKind::classify(15, 0.3), ClusterKind::LargeCommunity);
        assert_eq!(ClusterKind::classify(5, 0.5), ClusterKind::SocialGroup);
        // Density is checked before size
        assert_eq!(ClusterKind::classify(15, 0.9), ClusterKind::TightKnitGroup);
        // Boundaries are strict
        assert_eq!(ClusterKind::classify(4, 0.8), ClusterKind::SocialGroup);
        assert_eq!(ClusterKind::classify(10, 0.1), ClusterKind::SocialGroup);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&ClusterKind::TightKnitGroup).unwrap(),
            "\"Tight-knit Group\""
        );
        assert_eq!(
            serde_json::to_string(&ConnectionType::WatchParty).unwrap(),
            "\"watch_party\""
        );
        assert_eq!(serde_json::to_string(&NetworkType::Empty).unwrap(), "\"empty\"");
        assert_eq!(NetworkType::default(), NetworkType::Empty);
    }
}
