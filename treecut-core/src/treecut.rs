//! Pipeline orchestration: graph → spanning tree → clusters.

use tracing::{Span, info, instrument};

use crate::{
    Result,
    builder::CutStrategy,
    clustering::Clustering,
    extract::{VariationStop, extract_by_count, extract_by_variation},
    graph::WeightedGraph,
    mst::{SpanningTree, prim_mst},
    points::PointSet,
};

/// Result of a [`Treecut::run`] invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusteringOutcome {
    clustering: Clustering,
    tree: SpanningTree,
    removed_edges: usize,
    variation_stop: Option<VariationStop>,
}

impl ClusteringOutcome {
    /// Returns the clustering.
    #[must_use]
    #[rustfmt::skip]
    pub fn clustering(&self) -> &Clustering { &self.clustering }

    /// Returns the spanning tree the clusters were cut from.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the total weight of the spanning tree.
    #[must_use]
    pub fn tree_weight(&self) -> f64 {
        self.tree.total_weight()
    }

    /// Returns how many tree edges were dropped.
    #[must_use]
    #[rustfmt::skip]
    pub fn removed_edges(&self) -> usize { self.removed_edges }

    /// Returns why variation-driven cutting stopped, or `None` when a fixed
    /// cluster count was requested.
    #[must_use]
    #[rustfmt::skip]
    pub fn variation_stop(&self) -> Option<VariationStop> { self.variation_stop }
}

/// Entry point for running the clustering pipeline.
///
/// # Examples
/// ```
/// use treecut_core::{PointSet, TreecutBuilder};
///
/// let points = PointSet::new(vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]])?;
/// let treecut = TreecutBuilder::new().with_cluster_count(2).build()?;
/// let outcome = treecut.run_points(&points)?;
/// assert_eq!(outcome.clustering().len(), 2);
/// assert_eq!(outcome.tree_weight(), 11.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Treecut {
    strategy: CutStrategy,
}

impl Treecut {
    pub(crate) fn new(strategy: CutStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the cut strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> CutStrategy { self.strategy }

    /// Computes the spanning tree of `graph` and cuts it into clusters.
    ///
    /// # Errors
    /// Returns [`crate::TreecutError::Mst`] when the graph is empty or
    /// disconnected and [`crate::TreecutError::Extraction`] when the cluster
    /// count exceeds the number of vertices.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            strategy = ?self.strategy,
            clusters,
        ),
    )]
    pub fn run(&self, graph: &WeightedGraph) -> Result<ClusteringOutcome> {
        let tree = prim_mst(graph)?;
        let outcome = match self.strategy {
            CutStrategy::ClusterCount(count) => {
                let clustering = extract_by_count(&tree, count)?;
                ClusteringOutcome {
                    removed_edges: clustering.len() - 1,
                    clustering,
                    tree,
                    variation_stop: None,
                }
            }
            CutStrategy::VariationThreshold(threshold) => {
                let variation = extract_by_variation(&tree, threshold)?;
                let (removed_edges, stop) = (variation.removed(), variation.stop());
                ClusteringOutcome {
                    clustering: variation.into_clustering(),
                    tree,
                    removed_edges,
                    variation_stop: Some(stop),
                }
            }
        };
        Span::current().record("clusters", outcome.clustering.len());
        info!(
            clusters = outcome.clustering.len(),
            tree_weight = outcome.tree_weight(),
            "clustering completed"
        );
        Ok(outcome)
    }

    /// Derives the complete Euclidean graph of `points` and runs the
    /// pipeline on it.
    ///
    /// # Errors
    /// Returns [`crate::TreecutError::Points`] when the graph cannot be
    /// derived, plus every error of [`Self::run`].
    pub fn run_points(&self, points: &PointSet) -> Result<ClusteringOutcome> {
        let graph = WeightedGraph::from_points(points)?;
        self.run(&graph)
    }
}
