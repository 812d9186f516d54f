//! Shared helper functions for spanning tree property tests.
//!
//! The union-find here is deliberately independent of
//! [`crate::DisjointSetForest`] so the oracle does not share code with the
//! implementation under test.

use crate::Edge;

/// Path-halving find for verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when `edges` form a forest (no cycles) over `vertex_count`.
pub(super) fn is_acyclic(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return false;
        }
        parent[right] = left;
    }
    true
}

/// Compares two tree weights allowing for summation-order rounding.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}
