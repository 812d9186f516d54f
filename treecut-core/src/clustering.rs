//! Cluster and clustering types shared by the extractor and the validator.
//!
//! A [`Clustering`] is a strict partition of `{0, …, V−1}`: every vertex
//! belongs to exactly one non-empty [`Cluster`]. Clusters are ordered by
//! their smallest member and list their members in ascending order, so two
//! equal partitions always compare equal.

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors raised when caller-supplied groups do not partition the vertices.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum PartitionError {
    /// A member id was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Size of the vertex universe.
        vertex_count: usize,
    },
    /// A vertex appeared more than once.
    #[error("vertex {vertex} appears in more than one place")]
    DuplicateVertex {
        /// The repeated vertex.
        vertex: usize,
    },
    /// A vertex was not covered by any group.
    #[error("vertex {vertex} is not assigned to any cluster")]
    MissingVertex {
        /// The first uncovered vertex.
        vertex: usize,
    },
    /// A group had no members.
    #[error("group {index} is empty")]
    EmptyCluster {
        /// Position of the empty group in the input.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PartitionError`] variants.
    enum PartitionErrorCode for PartitionError {
        /// A member id was outside `[0, vertex_count)`.
        VertexOutOfRange => VertexOutOfRange { .. } => "PARTITION_VERTEX_OUT_OF_RANGE",
        /// A vertex appeared more than once.
        DuplicateVertex => DuplicateVertex { .. } => "PARTITION_DUPLICATE_VERTEX",
        /// A vertex was not covered by any group.
        MissingVertex => MissingVertex { .. } => "PARTITION_MISSING_VERTEX",
        /// A group had no members.
        EmptyCluster => EmptyCluster { .. } => "PARTITION_EMPTY_CLUSTER",
    }
}

/// A non-empty, ascending set of vertex ids.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cluster {
    members: Vec<usize>,
}

impl Cluster {
    /// Returns the members in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn members(&self) -> &[usize] { &self.members }

    /// Returns the number of members.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.members.len() }

    /// Always `false`; kept for API symmetry with [`Self::len`].
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Returns `true` when `vertex` is a member.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.members.binary_search(&vertex).is_ok()
    }
}

/// A partition of `{0, …, vertex_count − 1}` into clusters.
///
/// # Examples
/// ```
/// use treecut_core::Clustering;
///
/// let clustering = Clustering::try_from_groups(4, vec![vec![3, 2], vec![1, 0]])?;
/// assert_eq!(clustering.len(), 2);
/// assert_eq!(clustering.clusters()[0].members(), &[0, 1]);
/// assert_eq!(clustering.assignments(), vec![0, 0, 1, 1]);
/// # Ok::<(), treecut_core::PartitionError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Clustering {
    vertex_count: usize,
    clusters: Vec<Cluster>,
}

impl Clustering {
    /// Validates `groups` as a partition of `vertex_count` vertices and
    /// normalises their order.
    ///
    /// # Errors
    /// Returns a [`PartitionError`] describing the first violation found:
    /// empty groups and out-of-range ids are reported in input order, then
    /// duplicates, then the lowest uncovered vertex.
    pub fn try_from_groups(
        vertex_count: usize,
        groups: Vec<Vec<usize>>,
    ) -> Result<Self, PartitionError> {
        check_partition(vertex_count, &groups)?;
        Ok(Self::from_validated_groups(vertex_count, groups))
    }

    /// Builds a clustering from groups already known to partition the
    /// vertices, sorting members and clusters into canonical order.
    pub(crate) fn from_validated_groups(vertex_count: usize, groups: Vec<Vec<usize>>) -> Self {
        let mut clusters: Vec<Cluster> = groups
            .into_iter()
            .map(|mut members| {
                members.sort_unstable();
                Cluster { members }
            })
            .collect();
        clusters.sort_unstable_by_key(|cluster| cluster.members.first().copied());
        Self {
            vertex_count,
            clusters,
        }
    }

    /// Returns the size of the vertex universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the clusters ordered by smallest member.
    #[must_use]
    #[rustfmt::skip]
    pub fn clusters(&self) -> &[Cluster] { &self.clusters }

    /// Returns the number of clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.clusters.len() }

    /// Returns `true` for the clustering of an empty vertex universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.clusters.is_empty() }

    /// Returns the index of the cluster holding `vertex`.
    #[must_use]
    pub fn cluster_of(&self, vertex: usize) -> Option<usize> {
        self.clusters
            .iter()
            .position(|cluster| cluster.contains(vertex))
    }

    /// Returns, for every vertex, the index of its cluster.
    #[must_use]
    pub fn assignments(&self) -> Vec<usize> {
        let mut assignments = vec![0; self.vertex_count];
        for (index, cluster) in self.clusters.iter().enumerate() {
            for &vertex in &cluster.members {
                assignments[vertex] = index;
            }
        }
        assignments
    }
}

/// Checks that `groups` partition `{0, …, vertex_count − 1}`.
pub(crate) fn check_partition(
    vertex_count: usize,
    groups: &[Vec<usize>],
) -> Result<(), PartitionError> {
    let mut seen = vec![false; vertex_count];
    for (index, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(PartitionError::EmptyCluster { index });
        }
        for &vertex in group {
            let Some(slot) = seen.get_mut(vertex) else {
                return Err(PartitionError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            };
            if *slot {
                return Err(PartitionError::DuplicateVertex { vertex });
            }
            *slot = true;
        }
    }
    match seen.iter().position(|covered| !covered) {
        Some(vertex) => Err(PartitionError::MissingVertex { vertex }),
        None => Ok(()),
    }
}
