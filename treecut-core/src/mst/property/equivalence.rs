//! Equivalence with the sequential Kruskal oracle and with exhaustive
//! enumeration.
//!
//! On connected inputs the fringe-growth tree must have the oracle's total
//! weight. On disconnected inputs the builder must refuse with
//! [`MstError::DisconnectedGraph`] and report the size of vertex `0`'s
//! component.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstError, WeightedGraph, prim_mst};

use super::enumeration::brute_force_minimum;
use super::helpers::{find_root, weights_match};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let oracle = sequential_kruskal(graph);
    let context = format!(
        "distribution={:?}, vertices={}, edges={}",
        fixture.distribution,
        graph.vertex_count(),
        graph.edge_count(),
    );

    match prim_mst(graph) {
        Ok(tree) => {
            if oracle.component_count != 1 {
                return Err(TestCaseError::fail(format!(
                    "builder succeeded on a graph with {} components ({context})",
                    oracle.component_count,
                )));
            }
            if tree.len() != oracle.edge_count {
                return Err(TestCaseError::fail(format!(
                    "edge count mismatch: prim={}, oracle={} ({context})",
                    tree.len(),
                    oracle.edge_count,
                )));
            }
            if !weights_match(tree.total_weight(), oracle.total_weight) {
                return Err(TestCaseError::fail(format!(
                    "total weight mismatch: prim={}, oracle={} ({context})",
                    tree.total_weight(),
                    oracle.total_weight,
                )));
            }
            Ok(())
        }
        Err(MstError::DisconnectedGraph {
            reached,
            vertex_count,
        }) => {
            let expected = component_size_of_first_vertex(graph);
            if oracle.component_count == 1
                || reached != expected
                || vertex_count != graph.vertex_count()
            {
                return Err(TestCaseError::fail(format!(
                    "unexpected disconnection report: reached={reached}, expected={expected}, \
                     components={} ({context})",
                    oracle.component_count,
                )));
            }
            Ok(())
        }
        Err(err) => Err(TestCaseError::fail(format!(
            "prim_mst failed: {err} ({context})"
        ))),
    }
}

/// Runs the exhaustive enumeration property for a tiny graph.
pub(super) fn run_brute_force_property(graph: &WeightedGraph) -> TestCaseResult {
    let expected = brute_force_minimum(graph);
    match (prim_mst(graph), expected) {
        (Ok(tree), Some(minimum)) => {
            if weights_match(tree.total_weight(), minimum) {
                Ok(())
            } else {
                Err(TestCaseError::fail(format!(
                    "prim weight {} differs from enumerated minimum {minimum}",
                    tree.total_weight(),
                )))
            }
        }
        (Err(MstError::DisconnectedGraph { .. }), None) => Ok(()),
        (result, expected) => Err(TestCaseError::fail(format!(
            "builder and enumeration disagree: {result:?} vs {expected:?}"
        ))),
    }
}

fn component_size_of_first_vertex(graph: &WeightedGraph) -> usize {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for edge in graph.edges() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
        }
    }
    let root = find_root(&mut parent, 0);
    (0..graph.vertex_count())
        .filter(|&vertex| find_root(&mut parent, vertex) == root)
        .count()
}
