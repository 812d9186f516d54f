//! Cluster extraction by removing the heaviest spanning tree edges.
//!
//! Both strategies sort the tree edges with [`Edge::removal_order`], drop a
//! suffix of the heaviest edges by truncation, and recover the connected
//! components of what remains with a fresh [`DisjointSetForest`].

mod statistics;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    Clustering, DisjointSetError, DisjointSetForest, Edge, SpanningTree,
    error::define_error_codes,
};

pub use self::statistics::EdgeStatistics;
use self::statistics::SortedPrefixStatistics;

/// Errors returned by the extraction strategies.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ExtractionError {
    /// The cluster count was outside `[1, vertex_count]`.
    #[error("cannot form {requested} clusters from {vertex_count} vertices")]
    InvalidClusterCount {
        /// The cluster count supplied by the caller.
        requested: usize,
        /// Number of vertices spanned by the tree.
        vertex_count: usize,
    },
    /// The variation threshold was not a positive finite number.
    #[error("variation threshold must be finite and greater than zero (got {threshold})")]
    InvalidThreshold {
        /// The threshold supplied by the caller.
        threshold: f64,
    },
    /// A tree edge referenced a vertex outside the forest.
    #[error("tree edge rejected by the disjoint-set forest: {source}")]
    UnionFind {
        /// Underlying forest error.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ExtractionError`] variants.
    enum ExtractionErrorCode for ExtractionError {
        /// The cluster count was outside `[1, vertex_count]`.
        InvalidClusterCount => InvalidClusterCount { .. } => "EXTRACT_INVALID_CLUSTER_COUNT",
        /// The variation threshold was not a positive finite number.
        InvalidThreshold => InvalidThreshold { .. } => "EXTRACT_INVALID_THRESHOLD",
        /// A tree edge referenced a vertex outside the forest.
        UnionFind => UnionFind { .. } => "EXTRACT_UNION_FIND_FAILURE",
    }
}

/// Why [`extract_by_variation`] stopped removing edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariationStop {
    /// The coefficient of variation fell to or below the threshold.
    WithinThreshold,
    /// At most one edge remained.
    EdgeFloor,
    /// The remaining edges had a mean weight of exactly zero, so their
    /// variation is undefined and treated as zero.
    DegenerateVariation,
}

impl VariationStop {
    /// Returns a short lowercase label suitable for logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WithinThreshold => "within_threshold",
            Self::EdgeFloor => "edge_floor",
            Self::DegenerateVariation => "degenerate_variation",
        }
    }
}

/// Result of [`extract_by_variation`].
#[derive(Clone, Debug, PartialEq)]
pub struct VariationOutcome {
    clustering: Clustering,
    removed: usize,
    coefficient_of_variation: f64,
    stop: VariationStop,
}

impl VariationOutcome {
    /// Returns the clustering built from the kept edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn clustering(&self) -> &Clustering { &self.clustering }

    /// Consumes the outcome, returning its clustering.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_clustering(self) -> Clustering { self.clustering }

    /// Returns the number of edges removed.
    #[must_use]
    #[rustfmt::skip]
    pub fn removed(&self) -> usize { self.removed }

    /// Returns the coefficient of variation of the kept edges, `0.0` when it
    /// was undefined.
    #[must_use]
    #[rustfmt::skip]
    pub fn coefficient_of_variation(&self) -> f64 { self.coefficient_of_variation }

    /// Returns why removal stopped.
    #[must_use]
    #[rustfmt::skip]
    pub fn stop(&self) -> VariationStop { self.stop }
}

/// Splits the tree into exactly `cluster_count` clusters by dropping its
/// `cluster_count − 1` heaviest edges.
///
/// # Examples
/// ```
/// use treecut_core::{WeightedGraph, extract_by_count, prim_mst};
///
/// let mut graph = WeightedGraph::new(4);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 9.0)?;
/// graph.add_edge(2, 3, 1.0)?;
/// let tree = prim_mst(&graph)?;
/// let clustering = extract_by_count(&tree, 2)?;
/// assert_eq!(clustering.clusters()[0].members(), &[0, 1]);
/// assert_eq!(clustering.clusters()[1].members(), &[2, 3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`ExtractionError::InvalidClusterCount`] when `cluster_count` is
/// zero or exceeds the number of vertices.
#[instrument(
    name = "core.extract_by_count",
    err,
    skip(tree),
    fields(vertices = tree.vertex_count()),
)]
pub fn extract_by_count(
    tree: &SpanningTree,
    cluster_count: usize,
) -> Result<Clustering, ExtractionError> {
    let vertex_count = tree.vertex_count();
    if cluster_count == 0 || cluster_count > vertex_count {
        return Err(ExtractionError::InvalidClusterCount {
            requested: cluster_count,
            vertex_count,
        });
    }

    let mut kept = sorted_edges(tree);
    let removed = (cluster_count - 1).min(kept.len());
    kept.truncate(kept.len() - removed);
    debug!(removed, kept = kept.len(), "dropped heaviest tree edges");
    connected_components(vertex_count, &kept)
}

/// Removes the heaviest tree edges one at a time until the coefficient of
/// variation of the remaining weights is at most `threshold`.
///
/// Removal stops as soon as one of these holds, checked in order:
///
/// 1. the remaining edges have a mean weight of exactly zero
///    ([`VariationStop::DegenerateVariation`]);
/// 2. their coefficient of variation is `<= threshold`
///    ([`VariationStop::WithinThreshold`]);
/// 3. at most one edge remains ([`VariationStop::EdgeFloor`]).
///
/// # Examples
/// ```
/// use treecut_core::{VariationStop, WeightedGraph, extract_by_variation, prim_mst};
///
/// let mut graph = WeightedGraph::new(5);
/// for (left, right, weight) in [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 7.0)] {
///     graph.add_edge(left, right, weight)?;
/// }
/// let tree = prim_mst(&graph)?;
/// let outcome = extract_by_variation(&tree, 0.1)?;
/// assert_eq!(outcome.removed(), 1);
/// assert_eq!(outcome.stop(), VariationStop::WithinThreshold);
/// assert_eq!(outcome.clustering().len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`ExtractionError::InvalidThreshold`] when `threshold` is not a
/// finite number greater than zero.
#[instrument(
    name = "core.extract_by_variation",
    err,
    skip(tree),
    fields(vertices = tree.vertex_count(), removed, stop),
)]
pub fn extract_by_variation(
    tree: &SpanningTree,
    threshold: f64,
) -> Result<VariationOutcome, ExtractionError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ExtractionError::InvalidThreshold { threshold });
    }

    let mut kept = sorted_edges(tree);
    let (len, coefficient_of_variation, stop) = {
        let prefixes = SortedPrefixStatistics::new(&kept);
        let mut len = kept.len();
        loop {
            let stats = prefixes.prefix(len);
            match stats.coefficient_of_variation() {
                None if len > 0 => {
                    warn!(
                        edges = len,
                        "remaining edges have zero mean weight; treating variation as zero"
                    );
                    break (len, 0.0, VariationStop::DegenerateVariation);
                }
                Some(cv) if cv <= threshold => break (len, cv, VariationStop::WithinThreshold),
                cv if len <= 1 => break (len, cv.unwrap_or(0.0), VariationStop::EdgeFloor),
                _ => len -= 1,
            }
        }
    };
    let removed = kept.len() - len;
    kept.truncate(len);

    let span = tracing::Span::current();
    span.record("removed", removed);
    span.record("stop", stop.as_str());
    debug!(removed, coefficient_of_variation, "variation extraction finished");

    Ok(VariationOutcome {
        clustering: connected_components(tree.vertex_count(), &kept)?,
        removed,
        coefficient_of_variation,
        stop,
    })
}

fn sorted_edges(tree: &SpanningTree) -> Vec<Edge> {
    let mut edges = tree.edges().to_vec();
    edges.sort_by(Edge::removal_order);
    edges
}

/// Groups vertices by representative, in order of each group's first vertex.
fn connected_components(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<Clustering, ExtractionError> {
    let mut forest = DisjointSetForest::new(vertex_count);
    for edge in edges {
        forest.union(edge.source(), edge.target())?;
    }

    let mut group_of_root: Vec<Option<usize>> = vec![None; vertex_count];
    let mut groups: Vec<Vec<usize>> = Vec::with_capacity(forest.component_count());
    for vertex in 0..vertex_count {
        let root = forest.find(vertex)?;
        let index = *group_of_root[root].get_or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[index].push(vertex);
    }
    Ok(Clustering::from_validated_groups(vertex_count, groups))
}
