//! Community detection algorithms
//!
//! Connected components over an undirected [`GraphView`].

use super::common::{GraphView, NodeIndex};

/// Result of the connected components algorithm
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentResult {
    /// Members of each component, indexed by component id.
    ///
    /// Component ids follow discovery order: component 0 contains node 0, the
    /// next component starts at the lowest index not yet visited, and so on.
    pub components: Vec<Vec<NodeIndex>>,
    /// Component id of each node
    pub node_component: Vec<usize>,
}

impl ComponentResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Size of the largest component, 0 for an empty graph
    pub fn largest(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Connected components
///
/// Runs an iterative depth-first traversal from every unvisited node, in index
/// order. Members of a component are listed in visit order.
pub fn connected_components(view: &GraphView) -> ComponentResult {
    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut node_component = vec![0; n];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }

        let component_id = components.len();
        let mut members = Vec::new();
        stack.push(start);

        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            node_component[current] = component_id;
            members.push(current);

            for &neighbor in view.neighbors(current) {
                if !visited[neighbor] {
                    stack.push(neighbor);
                }
            }
        }

        components.push(members);
    }

    ComponentResult {
        components,
        node_component,
    }
}
