//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use crate::source::SyntheticError;
use treecut_core::{ExtractionError, MstError, PointSetError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic source generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Deriving the complete graph failed.
    #[error("graph derivation failed: {0}")]
    Points(#[from] PointSetError),
    /// Spanning tree construction failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Cluster extraction failed.
    #[error("cluster extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}
