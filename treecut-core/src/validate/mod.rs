//! Validation of a clustering against ground-truth labels.
//!
//! [`positional_agreement`] compares label group `i` with cluster `i`. It
//! assumes the clustering happens to list its clusters in label order, which
//! the extractor does not guarantee, so a good clustering can score poorly.
//! [`clustering_quality_score`] reports ARI and NMI, which do not depend on
//! group order.

mod quality;

use std::collections::HashMap;

use thiserror::Error;

use crate::{
    Clustering, PartitionError, clustering::check_partition, error::define_error_codes,
};

pub use self::quality::ClusteringQualityScore;

/// Errors returned while validating a clustering.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Labels and clustering cover different numbers of vertices.
    #[error("labels cover {labels} vertices but the clustering covers {clustering}")]
    VertexCountMismatch {
        /// Vertices carrying a label.
        labels: usize,
        /// Vertices in the clustering.
        clustering: usize,
    },
    /// Label groups did not partition the vertices.
    #[error("label groups are not a partition: {source}")]
    Partition {
        /// Underlying partition error.
        #[from]
        source: PartitionError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ValidationError`] variants.
    enum ValidationErrorCode for ValidationError {
        /// Labels and clustering cover different numbers of vertices.
        VertexCountMismatch => VertexCountMismatch { .. } => "VALIDATION_VERTEX_COUNT_MISMATCH",
        /// Label groups did not partition the vertices.
        Partition => Partition { .. } => "VALIDATION_INVALID_PARTITION",
    }
}

/// Ground-truth labels grouped by label in first-seen order.
///
/// # Examples
/// ```
/// use treecut_core::LabeledDataset;
///
/// let labels = LabeledDataset::from_labels(&["b", "a", "b", "c"]);
/// assert_eq!(labels.label_names(), &["b", "a", "c"]);
/// assert_eq!(labels.groups()[0], vec![0, 2]);
/// assert_eq!(labels.label_of(3), Some("c"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabeledDataset {
    names: Vec<String>,
    groups: Vec<Vec<usize>>,
    assignments: Vec<usize>,
}

impl LabeledDataset {
    /// Groups vertex ids by label; vertex `i` carries `labels[i]`.
    #[must_use]
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut index_of: HashMap<&str, usize> = HashMap::new();
        let mut names = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut assignments = Vec::with_capacity(labels.len());
        for (vertex, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            let index = *index_of.entry(label).or_insert_with(|| {
                names.push(label.to_owned());
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[index].push(vertex);
            assignments.push(index);
        }
        Self {
            names,
            groups,
            assignments,
        }
    }

    /// Builds a dataset from explicit named groups over `vertex_count`
    /// vertices, keeping the given group order.
    ///
    /// # Errors
    /// Returns [`ValidationError::Partition`] when the groups do not
    /// partition the vertices.
    pub fn try_from_groups(
        vertex_count: usize,
        named_groups: Vec<(String, Vec<usize>)>,
    ) -> Result<Self, ValidationError> {
        let (names, mut groups): (Vec<String>, Vec<Vec<usize>>) = named_groups.into_iter().unzip();
        check_partition(vertex_count, &groups)?;
        let mut assignments = vec![0; vertex_count];
        for (index, group) in groups.iter_mut().enumerate() {
            group.sort_unstable();
            for &vertex in group.iter() {
                assignments[vertex] = index;
            }
        }
        Ok(Self {
            names,
            groups,
            assignments,
        })
    }

    /// Returns the number of labelled vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.assignments.len() }

    /// Returns the distinct label names in group order.
    #[must_use]
    #[rustfmt::skip]
    pub fn label_names(&self) -> &[String] { &self.names }

    /// Returns the ascending vertex ids of each label group.
    #[must_use]
    #[rustfmt::skip]
    pub fn groups(&self) -> &[Vec<usize>] { &self.groups }

    /// Returns, for every vertex, the index of its label group.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[usize] { &self.assignments }

    /// Returns the label carried by `vertex`.
    #[must_use]
    pub fn label_of(&self, vertex: usize) -> Option<&str> {
        let index = *self.assignments.get(vertex)?;
        self.names.get(index).map(String::as_str)
    }
}

fn check_vertex_counts(
    labels: &LabeledDataset,
    clustering: &Clustering,
) -> Result<(), ValidationError> {
    if labels.vertex_count() == clustering.vertex_count() {
        Ok(())
    } else {
        Err(ValidationError::VertexCountMismatch {
            labels: labels.vertex_count(),
            clustering: clustering.vertex_count(),
        })
    }
}

/// Counts, for each label group `i`, its vertices that also lie in cluster
/// `i`. Groups without a cluster at the same position score `0`.
///
/// # Examples
/// ```
/// use treecut_core::{Clustering, LabeledDataset, positional_agreement};
///
/// let labels = LabeledDataset::from_labels(&["a", "a", "b", "b"]);
/// let clustering = Clustering::try_from_groups(4, vec![vec![0, 2], vec![1, 3]])?;
/// assert_eq!(positional_agreement(&labels, &clustering)?, vec![1, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`ValidationError::VertexCountMismatch`] when the labels and the
/// clustering describe different vertex universes.
pub fn positional_agreement(
    labels: &LabeledDataset,
    clustering: &Clustering,
) -> Result<Vec<usize>, ValidationError> {
    check_vertex_counts(labels, clustering)?;
    Ok(labels
        .groups()
        .iter()
        .enumerate()
        .map(|(index, group)| {
            clustering.clusters().get(index).map_or(0, |cluster| {
                group
                    .iter()
                    .filter(|&&vertex| cluster.contains(vertex))
                    .count()
            })
        })
        .collect())
}

/// Computes ARI and NMI between the labels and the clustering.
///
/// # Examples
/// ```
/// use treecut_core::{Clustering, LabeledDataset, clustering_quality_score};
///
/// let labels = LabeledDataset::from_labels(&["a", "a", "b", "b"]);
/// let clustering = Clustering::try_from_groups(4, vec![vec![2, 3], vec![0, 1]])?;
/// let score = clustering_quality_score(&labels, &clustering)?;
/// assert!((score.ari - 1.0).abs() < 1e-12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`ValidationError::VertexCountMismatch`] when the labels and the
/// clustering describe different vertex universes.
pub fn clustering_quality_score(
    labels: &LabeledDataset,
    clustering: &Clustering,
) -> Result<ClusteringQualityScore, ValidationError> {
    check_vertex_counts(labels, clustering)?;
    Ok(quality::score(labels.assignments(), &clustering.assignments()))
}
