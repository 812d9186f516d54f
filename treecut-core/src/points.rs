//! Coordinate side-table and complete Euclidean graph derivation.
//!
//! Coordinates are kept apart from [`WeightedGraph`]: the graph only ever
//! sees the derived edge weights, while renderers read the coordinates
//! directly from the [`PointSet`].

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    distance::{DistanceError, euclidean_distance},
    error::define_error_codes,
    graph::{GraphError, WeightedGraph},
};

/// Errors returned while validating a point set or deriving its graph.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum PointSetError {
    /// A row contained no coordinates.
    #[error("point {index} has no coordinates")]
    EmptyRow {
        /// Row that was empty.
        index: usize,
    },
    /// A row did not share the dimension of the first row.
    #[error("point {index} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        /// Row with the unexpected dimension.
        index: usize,
        /// Dimension of the first row.
        expected: usize,
        /// Dimension of the offending row.
        found: usize,
    },
    /// A coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate on axis {axis}")]
    NonFinite {
        /// Row holding the value.
        index: usize,
        /// Axis of the value.
        axis: usize,
    },
    /// Computing a pairwise distance failed.
    #[error("distance between points {left} and {right} failed: {error}")]
    Distance {
        /// First point of the pair.
        left: usize,
        /// Second point of the pair.
        right: usize,
        /// Underlying distance error.
        #[source]
        error: DistanceError,
    },
    /// Adding a derived edge to the graph failed.
    #[error("derived edge rejected: {error}")]
    Graph {
        /// Underlying graph error.
        #[source]
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`PointSetError`] variants.
    enum PointSetErrorCode for PointSetError {
        /// A row contained no coordinates.
        EmptyRow => EmptyRow { .. } => "POINTS_EMPTY_ROW",
        /// A row did not share the dimension of the first row.
        DimensionMismatch => DimensionMismatch { .. } => "POINTS_DIMENSION_MISMATCH",
        /// A coordinate was NaN or infinite.
        NonFinite => NonFinite { .. } => "POINTS_NON_FINITE",
        /// Computing a pairwise distance failed.
        Distance => Distance { .. } => "POINTS_DISTANCE_FAILURE",
        /// Adding a derived edge to the graph failed.
        Graph => Graph { .. } => "POINTS_GRAPH_FAILURE",
    }
}

/// Validated coordinates, one row per vertex.
///
/// # Examples
/// ```
/// use treecut_core::PointSet;
///
/// let points = PointSet::new(vec![vec![0.0, 0.0], vec![3.0, 4.0]])?;
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.dimension(), 2);
/// # Ok::<(), treecut_core::PointSetError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    rows: Vec<Vec<f64>>,
    dimension: usize,
}

impl PointSet {
    /// Validates and wraps `rows`.
    ///
    /// An empty list of rows is accepted and has dimension `0`.
    ///
    /// # Errors
    /// Returns [`PointSetError::EmptyRow`] for a row without coordinates,
    /// [`PointSetError::DimensionMismatch`] when rows disagree on dimension,
    /// and [`PointSetError::NonFinite`] for NaN or infinite coordinates.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, PointSetError> {
        let dimension = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(PointSetError::EmptyRow { index });
            }
            if row.len() != dimension {
                return Err(PointSetError::DimensionMismatch {
                    index,
                    expected: dimension,
                    found: row.len(),
                });
            }
            if let Some(axis) = row.iter().position(|value| !value.is_finite()) {
                return Err(PointSetError::NonFinite { index, axis });
            }
        }
        Ok(Self { rows, dimension })
    }

    /// Returns the number of points.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.rows.len() }

    /// Returns `true` when the set holds no points.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Returns the shared dimension of every row.
    #[must_use]
    #[rustfmt::skip]
    pub fn dimension(&self) -> usize { self.dimension }

    /// Returns the coordinates of `index`, if present.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterates over the rows in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl WeightedGraph {
    /// Builds the complete graph over `points`, weighting each unordered pair
    /// by its Euclidean distance.
    ///
    /// Pairs are added in row-major order `(0, 1), (0, 2), …, (1, 2), …`.
    ///
    /// # Examples
    /// ```
    /// use treecut_core::{PointSet, WeightedGraph};
    ///
    /// let points = PointSet::new(vec![vec![0.0], vec![1.0], vec![3.0]])?;
    /// let graph = WeightedGraph::from_points(&points)?;
    /// assert_eq!(graph.edge_count(), 3);
    /// assert_eq!(graph.edges()[2].weight(), 2.0);
    /// # Ok::<(), treecut_core::PointSetError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`PointSetError::Distance`] or [`PointSetError::Graph`] when a
    /// pair cannot be turned into an edge.
    #[instrument(name = "core.from_points", err, skip(points), fields(points = points.len()))]
    pub fn from_points(points: &PointSet) -> Result<Self, PointSetError> {
        let count = points.len();
        let mut graph = Self::new(count);
        for (left, left_row) in points.iter().enumerate() {
            for (offset, right_row) in points.iter().skip(left + 1).enumerate() {
                let right = left + 1 + offset;
                let weight = euclidean_distance(left_row, right_row).map_err(|error| {
                    PointSetError::Distance { left, right, error }
                })?;
                graph
                    .add_edge(left, right, weight)
                    .map_err(|error| PointSetError::Graph { error })?;
            }
        }
        debug!(edges = graph.edge_count(), "derived complete euclidean graph");
        Ok(graph)
    }
}
