//! Weighted undirected graph used as the substrate for spanning tree and
//! clustering algorithms.
//!
//! Vertices are dense `usize` identifiers in `[0, vertex_count)`. Edges are
//! append-only: once added they are never removed, so a graph becomes
//! effectively immutable as soon as the caller stops adding edges.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::error::define_error_codes;

/// Explains why an edge was rejected by [`WeightedGraph::add_edge`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidEdgeReason {
    /// Both endpoints referenced the same vertex.
    SelfLoop,
    /// An endpoint was outside `[0, vertex_count)`.
    VertexOutOfRange,
    /// The weight was negative.
    NegativeWeight,
    /// The weight was NaN or infinite.
    NonFiniteWeight,
}

impl fmt::Display for InvalidEdgeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SelfLoop => "self-loop",
            Self::VertexOutOfRange => "vertex out of range",
            Self::NegativeWeight => "negative weight",
            Self::NonFiniteWeight => "non-finite weight",
        })
    }
}

/// Errors returned while building a [`WeightedGraph`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// The edge could not be added to the graph.
    #[error("invalid edge ({left}, {right}) with weight {weight}: {reason} (vertex_count {vertex_count})")]
    InvalidEdge {
        /// The first endpoint as provided.
        left: usize,
        /// The second endpoint as provided.
        right: usize,
        /// The weight as provided.
        weight: f64,
        /// The number of vertices in the graph.
        vertex_count: usize,
        /// Why the edge was rejected.
        reason: InvalidEdgeReason,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The edge could not be added to the graph.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
    }
}

/// An undirected weighted edge in canonical form (`source < target`).
///
/// The `sequence` records the order in which the edge was added to its graph.
/// Two edges with the same endpoints and weight remain distinct because their
/// sequences differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
    sequence: u64,
}

impl Edge {
    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns the insertion sequence of the edge within its graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint of this edge.
    ///
    /// # Examples
    /// ```
    /// use treecut_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(3);
    /// graph.add_edge(2, 0, 1.5)?;
    /// let edge = graph.edges()[0];
    /// assert_eq!(edge.opposite(0), Some(2));
    /// assert_eq!(edge.opposite(1), None);
    /// # Ok::<(), treecut_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn opposite(&self, vertex: usize) -> Option<usize> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Orders edges by weight, breaking ties by `(source, target, sequence)`.
    ///
    /// This is the single ordering used wherever edges are sorted, so equal
    /// weights always resolve the same way.
    #[must_use]
    pub fn removal_order(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Undirected weighted graph over a fixed number of vertices.
///
/// # Examples
/// ```
/// use treecut_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), treecut_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds an undirected edge between `left` and `right`.
    ///
    /// Parallel edges are kept as distinct edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when the edge is a self-loop, when
    /// either endpoint is outside `[0, vertex_count)`, or when the weight is
    /// negative or non-finite.
    pub fn add_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<(), GraphError> {
        let reason = if left >= self.vertex_count || right >= self.vertex_count {
            Some(InvalidEdgeReason::VertexOutOfRange)
        } else if left == right {
            Some(InvalidEdgeReason::SelfLoop)
        } else if !weight.is_finite() {
            Some(InvalidEdgeReason::NonFiniteWeight)
        } else if weight < 0.0 {
            Some(InvalidEdgeReason::NegativeWeight)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GraphError::InvalidEdge {
                left,
                right,
                weight,
                vertex_count: self.vertex_count,
                reason,
            });
        }

        let (source, target) = if left < right {
            (left, right)
        } else {
            (right, left)
        };
        let index = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
            sequence: index as u64,
        });
        for vertex in [source, target] {
            if let Some(incident) = self.adjacency.get_mut(vertex) {
                incident.push(index);
            }
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns every edge in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Iterates over the edges touching `vertex` in insertion order.
    ///
    /// Yields nothing when `vertex` is outside the graph.
    pub fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.edges.get(index))
    }
}
