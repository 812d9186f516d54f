//! Sequential Kruskal oracle for spanning tree property verification.

use crate::{Edge, WeightedGraph};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components of the input.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
pub(super) fn sequential_kruskal(graph: &WeightedGraph) -> OracleResult {
    let vertex_count = graph.vertex_count();
    let mut edges = graph.edges().to_vec();
    edges.sort_by(Edge::removal_order);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut component_count = vertex_count;
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for edge in &edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            total_weight += edge.weight();
            edge_count += 1;
            component_count -= 1;
        }
    }

    OracleResult {
        total_weight,
        edge_count,
        component_count,
    }
}
