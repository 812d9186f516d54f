//! Disjoint-set forest (union-find) used to recover connected components from
//! the edges kept by the extractor.
//!
//! Path compression in [`DisjointSetForest::find`] and union by rank keep a
//! sequence of `U` unions and `Q` queries over `N` elements near-linear,
//! which matters because the extractor rebuilds a fresh forest for every edge
//! set it evaluates.

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors returned by [`DisjointSetForest`] operations.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DisjointSetError {
    /// An element id was outside `[0, len)`.
    #[error("element {index} is out of bounds for a forest of {len} elements")]
    OutOfBounds {
        /// The rejected element.
        index: usize,
        /// Number of elements in the forest.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// An element id was outside `[0, len)`.
        OutOfBounds => OutOfBounds { .. } => "UNION_FIND_OUT_OF_BOUNDS",
    }
}

/// Union-find over the elements `0..len`.
///
/// # Examples
/// ```
/// use treecut_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 1)?);
/// assert!(!forest.union(1, 0)?);
/// assert!(forest.connected(0, 1)?);
/// assert!(!forest.connected(0, 2)?);
/// assert_eq!(forest.component_count(), 3);
/// # Ok::<(), treecut_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates a forest of `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the forest has no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `element`,
    /// compressing the path behind it.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }
        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the higher rank becomes the parent; on equal ranks the
    /// lower root id wins. Returns `true` when two distinct sets were merged.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when either id is `>= len`.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let left = self.find(left)?;
        let right = self.find(right)?;
        if left == right {
            return Ok(false);
        }

        let (parent, child) = match self.rank[left].cmp(&self.rank[right]) {
            std::cmp::Ordering::Greater => (left, right),
            std::cmp::Ordering::Less => (right, left),
            std::cmp::Ordering::Equal => {
                let (parent, child) = (left.min(right), left.max(right));
                self.rank[parent] = self.rank[parent].saturating_add(1);
                (parent, child)
            }
        };
        self.parent[child] = parent;
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when either id is `>= len`.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfBounds {
                index: element,
                len: self.parent.len(),
            })
        }
    }
}
