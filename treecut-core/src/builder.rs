//! Builder utilities for configuring the [`Treecut`] pipeline.
//!
//! Exposes the cut strategy selection surface and the validation applied
//! before a [`Treecut`] is constructed.

use crate::{Result, error::TreecutError, treecut::Treecut};

/// How the spanning tree is cut into clusters.
///
/// # Examples
/// ```
/// use treecut_core::CutStrategy;
///
/// let strategy = CutStrategy::ClusterCount(3);
/// assert!(matches!(strategy, CutStrategy::ClusterCount(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutStrategy {
    /// Drop the `k − 1` heaviest tree edges to obtain exactly `k` clusters.
    ClusterCount(usize),
    /// Drop the heaviest tree edges until the coefficient of variation of the
    /// remaining weights is at most the threshold.
    VariationThreshold(f64),
}

impl Default for CutStrategy {
    fn default() -> Self {
        Self::ClusterCount(2)
    }
}

/// Configures and constructs [`Treecut`] instances.
///
/// # Examples
/// ```
/// use treecut_core::{CutStrategy, TreecutBuilder};
///
/// let treecut = TreecutBuilder::new()
///     .with_variation_threshold(0.25)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(treecut.strategy(), CutStrategy::VariationThreshold(0.25));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreecutBuilder {
    strategy: CutStrategy,
}

impl TreecutBuilder {
    /// Creates a builder that cuts into two clusters.
    ///
    /// # Examples
    /// ```
    /// use treecut_core::{CutStrategy, TreecutBuilder};
    ///
    /// assert_eq!(TreecutBuilder::new().strategy(), CutStrategy::ClusterCount(2));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests exactly `count` clusters.
    #[must_use]
    pub fn with_cluster_count(mut self, count: usize) -> Self {
        self.strategy = CutStrategy::ClusterCount(count);
        self
    }

    /// Requests variation-driven cutting with the given threshold.
    #[must_use]
    pub fn with_variation_threshold(mut self, threshold: f64) -> Self {
        self.strategy = CutStrategy::VariationThreshold(threshold);
        self
    }

    /// Replaces the strategy wholesale.
    #[must_use]
    pub fn with_strategy(mut self, strategy: CutStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> CutStrategy { self.strategy }

    /// Validates the configuration and constructs a [`Treecut`].
    ///
    /// # Examples
    /// ```
    /// use treecut_core::{TreecutBuilder, TreecutError};
    ///
    /// let err = TreecutBuilder::new().with_cluster_count(0).build().unwrap_err();
    /// assert!(matches!(err, TreecutError::InvalidClusterCount { got: 0 }));
    /// ```
    ///
    /// # Errors
    /// Returns [`TreecutError::InvalidClusterCount`] for a zero cluster count
    /// and [`TreecutError::InvalidThreshold`] for a threshold that is not a
    /// finite number greater than zero.
    pub fn build(self) -> Result<Treecut> {
        match self.strategy {
            CutStrategy::ClusterCount(0) => Err(TreecutError::InvalidClusterCount { got: 0 }),
            CutStrategy::VariationThreshold(threshold)
                if !threshold.is_finite() || threshold <= 0.0 =>
            {
                Err(TreecutError::InvalidThreshold { got: threshold })
            }
            strategy => Ok(Treecut::new(strategy)),
        }
    }
}
