//! Type definitions for spanning tree property tests.

use test_strategy::Arbitrary;

use crate::WeightedGraph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the fringe-growth builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning path plus roughly `0.5n` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph.
    #[weight(2)]
    Dense,
    /// Several components with no cross-component edges.
    #[weight(2)]
    Disconnected,
}

/// Fixture for spanning tree property tests.
///
/// Keeps the weight distribution alongside the graph so failures can be
/// diagnosed from the proptest output.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Generated graph.
    pub graph: WeightedGraph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
