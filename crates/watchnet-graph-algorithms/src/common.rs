//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of an undirected topology for algorithm execution.

use std::collections::HashSet;

/// Dense node index (0..node_count)
pub type NodeIndex = usize;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Every undirected pair is stored once in `pairs` (as `(low, high)`) and twice in
/// the CSR arrays, once per direction.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Offsets into `neighbors`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub neighbors: Vec<NodeIndex>,

    /// Distinct undirected pairs in first-seen order, normalised to `(low, high)`
    pub pairs: Vec<(NodeIndex, NodeIndex)>,
}

impl GraphView {
    /// Build a view from an edge list.
    ///
    /// Self loops, endpoints outside `0..node_count` and repeated pairs (in either
    /// direction) are dropped. Neighbor order follows the order edges were given.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex)>,
    {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        let mut adjacency: Vec<Vec<NodeIndex>> = vec![Vec::new(); node_count];

        for (u, v) in edges {
            if u == v || u >= node_count || v >= node_count {
                continue;
            }
            let pair = if u < v { (u, v) } else { (v, u) };
            if !seen.insert(pair) {
                continue;
            }
            pairs.push(pair);
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut neighbors = Vec::with_capacity(pairs.len() * 2);
        offsets.push(0);
        for list in adjacency {
            neighbors.extend(list);
            offsets.push(neighbors.len());
        }

        GraphView {
            node_count,
            offsets,
            neighbors,
            pairs,
        }
    }

    /// Number of distinct neighbors of a node (by index)
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Neighbors of a node
    pub fn neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.neighbors[start..end]
    }

    /// Number of distinct undirected pairs
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_is_symmetric() {
        let view = GraphView::from_edges(4, vec![(0, 1), (1, 2), (3, 1)]);

        assert_eq!(view.pair_count(), 3);
        assert_eq!(view.neighbors(1), &[0, 2, 3]);
        assert_eq!(view.neighbors(0), &[1]);
        assert_eq!(view.degree(3), 1);
        assert_eq!(view.offsets.len(), 5);
    }

    #[test]
    fn test_drops_loops_duplicates_and_out_of_range() {
        // (1, 0) repeats (0, 1); (2, 2) is a loop; (0, 9) is out of range
        let view = GraphView::from_edges(3, vec![(0, 1), (1, 0), (2, 2), (0, 9)]);

        assert_eq!(view.pairs, vec![(0, 1)]);
        assert_eq!(view.degree(0), 1);
        assert_eq!(view.degree(2), 0);
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_edges(0, Vec::new());
        assert!(view.is_empty());
        assert_eq!(view.offsets, vec![0]);
    }
}
