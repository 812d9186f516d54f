//! Exhaustive spanning tree enumeration for tiny graphs.
//!
//! Every subset of `V - 1` edges is checked for acyclicity; the lightest
//! acyclic subset is the true minimum. Exponential, so only used on graphs
//! with a handful of edges.

use crate::{Edge, WeightedGraph};

use super::helpers::is_acyclic;

/// Largest edge count accepted by [`brute_force_minimum`].
pub(super) const MAX_ENUMERATED_EDGES: usize = 14;

/// Returns the minimum spanning tree weight, or `None` when the graph has no
/// spanning tree.
pub(super) fn brute_force_minimum(graph: &WeightedGraph) -> Option<f64> {
    let edges = graph.edges();
    assert!(
        edges.len() <= MAX_ENUMERATED_EDGES,
        "brute force enumeration is limited to {MAX_ENUMERATED_EDGES} edges"
    );
    let needed = graph.vertex_count().saturating_sub(1);
    let mut best: Option<f64> = None;
    let mut chosen: Vec<Edge> = Vec::with_capacity(needed);

    for mask in 0_u32..(1_u32 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        chosen.clear();
        chosen.extend(
            edges
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, edge)| *edge),
        );
        if !is_acyclic(graph.vertex_count(), &chosen) {
            continue;
        }
        let weight: f64 = chosen.iter().map(Edge::weight).sum();
        if best.is_none_or(|current| weight < current) {
            best = Some(weight);
        }
    }
    best
}
