//! Graph algorithms for flow validation.
//!
//! Provides cycle detection and dangling-edge checks over a route's
//! node/edge graph.

use std::collections::{HashMap, HashSet};

use crate::models::{Edge, Node};

/// Detect cycles in a flow graph. Uses petgraph for cycle detection.
pub fn has_cycles(edges: &[Edge]) -> bool {
    use petgraph::Graph;
    use petgraph::algo::is_cyclic_directed;

    let mut graph = Graph::<&str, ()>::new();
    let mut node_map = HashMap::new();

    for edge in edges {
        node_map
            .entry(edge.source.as_str())
            .or_insert_with(|| graph.add_node(edge.source.as_str()));
        node_map
            .entry(edge.target.as_str())
            .or_insert_with(|| graph.add_node(edge.target.as_str()));
    }

    for edge in edges {
        if let (Some(&source), Some(&target)) = (
            node_map.get(edge.source.as_str()),
            node_map.get(edge.target.as_str()),
        ) {
            graph.add_edge(source, target, ());
        }
    }

    is_cyclic_directed(&graph)
}

/// Ids of edges whose source or target node no longer exists.
pub fn dangling_edges(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .iter()
        .filter(|e| !node_ids.contains(e.source.as_str()) || !node_ids.contains(e.target.as_str()))
        .map(|e| e.id.clone())
        .collect()
}

/// Check if adding an edge would create a cycle.
pub fn would_create_cycle(edges: &[Edge], new_edge: &Edge) -> bool {
    let mut test_edges = edges.to_vec();
    test_edges.push(new_edge.clone());
    has_cycles(&test_edges)
}
