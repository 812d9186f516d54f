//! Euclidean distance between coordinate vectors.
//!
//! Inputs are validated before accumulation so callers receive a precise
//! error instead of a NaN weight leaking into the graph.

use core::fmt;

use thiserror::Error;

/// Identifies whether an error was produced while inspecting the left or right
/// vector argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VectorKind {
    /// Value originating from the first argument.
    Left,
    /// Value originating from the second argument.
    Right,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors emitted while computing distances.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistanceError {
    /// Either input vector had zero length.
    #[error("vectors must have positive dimension")]
    ZeroLength,
    /// Input vectors had different lengths.
    #[error("dimension mismatch: left={left}, right={right}")]
    DimensionMismatch {
        /// Dimension of the left vector.
        left: usize,
        /// Dimension of the right vector.
        right: usize,
    },
    /// Encountered a non-finite value in one of the vectors.
    #[error("{which} vector contains a non-finite value at index {index}: {value}")]
    NonFinite {
        /// Which argument held the value.
        which: VectorKind,
        /// Position of the value.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

fn validate(values: &[f64], which: VectorKind) -> Result<(), DistanceError> {
    if values.is_empty() {
        return Err(DistanceError::ZeroLength);
    }
    if let Some((index, value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(DistanceError::NonFinite {
            which,
            index,
            value: *value,
        });
    }
    Ok(())
}

/// Computes the Euclidean distance between two vectors.
///
/// # Examples
///
/// ```
/// use treecut_core::{DistanceError, euclidean_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = euclidean_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0])?;
///     assert!((distance - 7.071_067_811_865_476).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`] when any input is empty.
/// - [`DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`DistanceError::NonFinite`] when a value is NaN or infinite.
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> Result<f64, DistanceError> {
    validate(left, VectorKind::Left)?;
    validate(right, VectorKind::Right)?;
    if left.len() != right.len() {
        return Err(DistanceError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let sum: f64 = left
        .iter()
        .zip(right)
        .map(|(l, r)| {
            let diff = l - r;
            diff * diff
        })
        .sum();
    Ok(sum.sqrt())
}
