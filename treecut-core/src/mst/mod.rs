//! Minimum spanning tree construction by greedy fringe growth (Prim).
//!
//! The tree grows from vertex `0`. Every vertex outside the tree remembers the
//! cheapest edge connecting it to the tree; each step accepts the cheapest of
//! those edges and relaxes the edges of the newly attached vertex.
//!
//! Ties are resolved deterministically:
//!
//! - when several fringe vertices share the minimum connecting weight, the
//!   lowest vertex id is attached first;
//! - a fringe vertex only swaps its connecting edge for a strictly cheaper
//!   one, so among equal-weight candidates the edge discovered first (from the
//!   earliest tree vertex, then in graph insertion order) is kept.
//!
//! The fringe is scanned linearly, giving `O(V² + E)` time. Graphs derived
//! from point sets are complete, where this matches the edge count anyway.

use thiserror::Error;
use tracing::{instrument, warn};

use crate::{
    error::define_error_codes,
    graph::{Edge, WeightedGraph},
};

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested a spanning tree for a graph without vertices.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// Some vertices cannot be reached from vertex `0`.
    #[error("graph is disconnected: reached {reached} of {vertex_count} vertices from vertex 0")]
    DisconnectedGraph {
        /// Number of vertices attached to the tree before growth stalled.
        reached: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested a spanning tree for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// Some vertices cannot be reached from vertex `0`.
        DisconnectedGraph => DisconnectedGraph { .. } => "MST_DISCONNECTED_GRAPH",
    }
}

/// A minimum spanning tree: exactly `vertex_count - 1` edges in the order the
/// builder accepted them.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Returns the number of vertices spanned by the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` for the edgeless tree of a single vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Per-vertex bookkeeping for vertices outside the tree.
struct Fringe {
    in_tree: Vec<bool>,
    cheapest: Vec<Option<Edge>>,
}

impl Fringe {
    fn new(vertex_count: usize) -> Self {
        Self {
            in_tree: vec![false; vertex_count],
            cheapest: vec![None; vertex_count],
        }
    }

    /// Moves `vertex` into the tree and relaxes its incident edges.
    fn attach(&mut self, graph: &WeightedGraph, vertex: usize) {
        self.in_tree[vertex] = true;
        self.cheapest[vertex] = None;
        for edge in graph.incident_edges(vertex) {
            let Some(other) = edge.opposite(vertex) else {
                continue;
            };
            if self.in_tree[other] {
                continue;
            }
            let slot = &mut self.cheapest[other];
            if slot.is_none_or(|current| edge.weight() < current.weight()) {
                *slot = Some(*edge);
            }
        }
    }

    /// Returns the fringe vertex with the cheapest connecting edge, preferring
    /// the lowest vertex id on equal weights.
    fn cheapest(&self) -> Option<(usize, Edge)> {
        let mut best: Option<(usize, Edge)> = None;
        for (vertex, candidate) in self.cheapest.iter().enumerate() {
            let Some(edge) = candidate else {
                continue;
            };
            if best.is_none_or(|(_, current)| edge.weight() < current.weight()) {
                best = Some((vertex, *edge));
            }
        }
        best
    }
}

/// Computes a minimum spanning tree of `graph`, growing it from vertex `0`.
///
/// # Examples
/// ```
/// use treecut_core::{WeightedGraph, prim_mst};
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// graph.add_edge(0, 2, 5.0)?;
/// let tree = prim_mst(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices and
/// [`MstError::DisconnectedGraph`] when some vertex is unreachable from
/// vertex `0`; no partial forest is returned.
#[instrument(
    name = "core.prim_mst",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim_mst(graph: &WeightedGraph) -> Result<SpanningTree, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut fringe = Fringe::new(vertex_count);
    let mut edges = Vec::with_capacity(vertex_count - 1);
    fringe.attach(graph, 0);

    while edges.len() + 1 < vertex_count {
        let Some((vertex, edge)) = fringe.cheapest() else {
            let reached = edges.len() + 1;
            warn!(reached, vertex_count, "spanning tree growth stalled");
            return Err(MstError::DisconnectedGraph {
                reached,
                vertex_count,
            });
        };
        edges.push(edge);
        fringe.attach(graph, vertex);
    }

    Ok(SpanningTree {
        vertex_count,
        edges,
    })
}

#[cfg(test)]
mod property;
