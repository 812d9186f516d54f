//! Structural invariants of a successfully built spanning tree.
//!
//! - exactly `V - 1` edges;
//! - no cycles;
//! - every tree edge is an edge of the input graph;
//! - each accepted edge attaches exactly one new vertex to the tree grown so
//!   far from vertex `0`;
//! - repeated runs produce the same tree.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningTree, WeightedGraph, prim_mst};

use super::helpers::is_acyclic;
use super::types::MstFixture;

/// Runs the structural invariant property for `fixture`.
///
/// Disconnected fixtures are skipped here; their error reporting is covered
/// by the oracle equivalence property.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let Ok(tree) = prim_mst(graph) else {
        return Ok(());
    };

    validate_edge_count(graph, &tree)?;
    if !is_acyclic(graph.vertex_count(), tree.edges()) {
        return Err(TestCaseError::fail(format!(
            "tree contains a cycle (distribution={:?})",
            fixture.distribution,
        )));
    }
    validate_provenance(graph, &tree)?;
    validate_growth_order(graph, &tree)?;

    let again = prim_mst(graph).map_err(|err| TestCaseError::fail(err.to_string()))?;
    if again != tree {
        return Err(TestCaseError::fail("repeated runs produced different trees"));
    }
    Ok(())
}

fn validate_edge_count(graph: &WeightedGraph, tree: &SpanningTree) -> TestCaseResult {
    let expected = graph.vertex_count() - 1;
    if tree.len() != expected {
        return Err(TestCaseError::fail(format!(
            "tree has {} edges, expected {expected}",
            tree.len(),
        )));
    }
    Ok(())
}

fn validate_provenance(graph: &WeightedGraph, tree: &SpanningTree) -> TestCaseResult {
    for edge in tree.edges() {
        let original = usize::try_from(edge.sequence())
            .ok()
            .and_then(|index| graph.edges().get(index));
        if original != Some(edge) {
            return Err(TestCaseError::fail(format!(
                "tree edge {edge:?} does not match the graph edge with its sequence",
            )));
        }
    }
    Ok(())
}

fn validate_growth_order(graph: &WeightedGraph, tree: &SpanningTree) -> TestCaseResult {
    let mut in_tree = vec![false; graph.vertex_count()];
    in_tree[0] = true;
    for (position, edge) in tree.edges().iter().enumerate() {
        let (source, target) = (in_tree[edge.source()], in_tree[edge.target()]);
        if source == target {
            return Err(TestCaseError::fail(format!(
                "edge {position} ({}, {}) does not extend the tree by one vertex",
                edge.source(),
                edge.target(),
            )));
        }
        in_tree[edge.source()] = true;
        in_tree[edge.target()] = true;
    }
    Ok(())
}
