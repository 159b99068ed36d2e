//! Graph topology analysis algorithms
//!
//! Density measures for undirected views.

use super::common::GraphView;
use super::community::ComponentResult;

/// Number of unordered pairs among `k` nodes: k(k-1)/2
pub fn possible_pairs(k: usize) -> usize {
    if k < 2 {
        0
    } else {
        k * (k - 1) / 2
    }
}

/// Fraction of the possible pairs among `k` nodes that `edges` covers.
///
/// Defined as 0 when fewer than two nodes exist and capped at 1.0, so an
/// edge count that includes parallel edges still yields a valid density.
pub fn pair_density(k: usize, edges: usize) -> f64 {
    let possible = possible_pairs(k);
    if possible == 0 {
        return 0.0;
    }
    (edges as f64 / possible as f64).min(1.0)
}

/// Number of distinct pairs with both endpoints inside each component.
///
/// Pairs never span two components, so each pair lands in exactly one count.
pub fn component_edge_counts(view: &GraphView, components: &ComponentResult) -> Vec<usize> {
    let mut counts = vec![0; components.component_count()];
    for &(u, _) in &view.pairs {
        counts[components.node_component[u]] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::connected_components;

    #[test]
    fn test_possible_pairs() {
        assert_eq!(possible_pairs(0), 0);
        assert_eq!(possible_pairs(1), 0);
        assert_eq!(possible_pairs(2), 1);
        assert_eq!(possible_pairs(4), 6);
    }

    #[test]
    fn test_density_of_complete_triangle() {
        let view = GraphView::from_edges(3, vec![(0, 1), (1, 2), (0, 2)]);
        let components = connected_components(&view);
        let counts = component_edge_counts(&view, &components);

        assert_eq!(counts, vec![3]);
        assert_eq!(pair_density(3, counts[0]), 1.0);
    }

    #[test]
    fn test_density_guards() {
        assert_eq!(pair_density(0, 0), 0.0);
        assert_eq!(pair_density(1, 5), 0.0);
        // Two parallel edges between one pair
        assert_eq!(pair_density(2, 2), 1.0);
        assert!((pair_density(4, 2) - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_component_edge_counts() {
        // Star 0-1, 0-2 and a separate pair 3-4
        let view = GraphView::from_edges(5, vec![(0, 1), (0, 2), (3, 4)]);
        let components = connected_components(&view);

        assert_eq!(component_edge_counts(&view, &components), vec![2, 1]);
    }
}
