use treecut_core::{PointSet, WeightedGraph};

/// Builds a graph from `(left, right, weight)` triples.
#[must_use]
pub fn graph(vertex_count: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(vertex_count);
    for &(left, right, weight) in edges {
        graph
            .add_edge(left, right, weight)
            .expect("fixture edges must be valid");
    }
    graph
}

/// Builds a point set from literal rows.
#[must_use]
pub fn points(rows: &[&[f64]]) -> PointSet {
    PointSet::new(rows.iter().map(|row| row.to_vec()).collect())
        .expect("fixture rows must be valid")
}
