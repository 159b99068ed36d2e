//! Connected group of users

use super::types::{ClusterKind, UserId};
use serde::{Deserialize, Serialize};

/// Fixed cluster colors, assigned cyclically by detection order
pub const CLUSTER_PALETTE: [&str; 10] = [
    "#7c3aed", // violet
    "#3b82f6", // blue
    "#10b981", // emerald
    "#f59e0b", // amber
    "#ef4444", // red
    "#8b5cf6", // purple
    "#06b6d4", // cyan
    "#f97316", // orange
    "#14b8a6", // teal
    "#ec4899", // pink
];

/// Palette color for the cluster detected at `index`
pub fn cluster_color(index: usize) -> &'static str {
    CLUSTER_PALETTE[index % CLUSTER_PALETTE.len()]
}

/// A connected component of the viewing network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCluster {
    /// 0-based detection order
    pub id: usize,

    /// "Cluster N", with N = id + 1
    pub name: String,

    /// Members in traversal order
    pub member_ids: Vec<UserId>,

    /// Equal to `member_ids.len()`
    pub user_count: usize,

    /// Present intra-cluster pairs over possible pairs, in [0, 1]
    pub density: f64,

    pub color: String,

    pub characteristic_type: ClusterKind,
}

impl UserCluster {
    pub fn new(id: usize, member_ids: Vec<UserId>, density: f64) -> Self {
        let user_count = member_ids.len();
        UserCluster {
            id,
            name: format!("Cluster {}", id + 1),
            member_ids,
            user_count,
            density,
            color: cluster_color(id).to_string(),
            characteristic_type: ClusterKind::classify(user_count, density),
        }
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.member_ids.contains(id)
    }
}
