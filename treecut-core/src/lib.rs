//! Treecut core library.
//!
//! Partitions a weighted graph into clusters by computing its minimum
//! spanning tree and removing the heaviest tree edges. The connected
//! components that remain are the clusters.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod clustering;
mod distance;
mod error;
mod extract;
mod graph;
mod mst;
mod points;
mod treecut;
mod union_find;
mod validate;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{CutStrategy, TreecutBuilder},
    clustering::{Cluster, Clustering, PartitionError, PartitionErrorCode},
    distance::{DistanceError, VectorKind, euclidean_distance},
    error::{Result, TreecutError, TreecutErrorCode},
    extract::{
        EdgeStatistics, ExtractionError, ExtractionErrorCode, VariationOutcome, VariationStop,
        extract_by_count, extract_by_variation,
    },
    graph::{Edge, GraphError, GraphErrorCode, InvalidEdgeReason, WeightedGraph},
    mst::{MstError, MstErrorCode, SpanningTree, prim_mst},
    points::{PointSet, PointSetError, PointSetErrorCode},
    treecut::{ClusteringOutcome, Treecut},
    union_find::{DisjointSetError, DisjointSetErrorCode, DisjointSetForest},
    validate::{
        ClusteringQualityScore, LabeledDataset, ValidationError, ValidationErrorCode,
        clustering_quality_score, positional_agreement,
    },
};
