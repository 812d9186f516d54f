//! Seeded synthetic point sets for benchmarking.
//!
//! Points are drawn uniformly from boxes around centroids spaced evenly on
//! a circle in the first two dimensions, so the tree has `cluster_count - 1`
//! clearly heavier bridge edges.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::f64::consts::PI;
use treecut_core::{PointSet, PointSetError};

/// Errors that may occur while generating synthetic points.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested dimension count was zero.
    #[error("dimension count must be greater than zero")]
    ZeroDimensions,
    /// The requested cluster count was zero.
    #[error("cluster count must be greater than zero")]
    ZeroClusters,
    /// The configured cluster count exceeded the available points.
    #[error("cluster count ({cluster_count}) must not exceed point count ({point_count})")]
    ClusterCountExceedsPointCount {
        /// Number of clusters requested.
        cluster_count: usize,
        /// Number of points requested.
        point_count: usize,
    },
    /// A floating-point generator parameter was invalid.
    #[error("invalid floating-point parameter `{parameter}`")]
    InvalidFloatParameter {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
    /// The generated rows were rejected.
    #[error("generated points were rejected: {0}")]
    Points(#[from] PointSetError),
}

/// Configuration for blob generation.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Dimensionality of each point.
    pub dimensions: usize,
    /// Number of blobs.
    pub cluster_count: usize,
    /// Radius of the circle the centroids sit on.
    pub separation: f64,
    /// Half-width of the box each blob is drawn from.
    pub spread: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generated points together with the blob each point was drawn from.
#[derive(Clone, Debug)]
pub struct SyntheticBlobs {
    points: PointSet,
    labels: Vec<usize>,
}

impl SyntheticBlobs {
    /// Generates blobs; point `i` belongs to blob `i % cluster_count`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &BlobConfig) -> Result<Self, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let centroids = centroids(config, &mut rng);

        let mut rows = Vec::with_capacity(config.point_count);
        let mut labels = Vec::with_capacity(config.point_count);
        for (index, centroid) in centroids.iter().cycle().take(config.point_count).enumerate() {
            rows.push(jitter(centroid, config.spread, &mut rng));
            labels.push(index % config.cluster_count);
        }

        Ok(Self {
            points: PointSet::new(rows)?,
            labels,
        })
    }

    /// Returns the generated points.
    #[must_use]
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    /// Returns the blob of every point.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

fn validate(config: &BlobConfig) -> Result<(), SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.cluster_count > config.point_count {
        return Err(SyntheticError::ClusterCountExceedsPointCount {
            cluster_count: config.cluster_count,
            point_count: config.point_count,
        });
    }
    if !config.separation.is_finite() || config.separation <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter {
            parameter: "separation",
        });
    }
    if !config.spread.is_finite() || config.spread <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter {
            parameter: "spread",
        });
    }
    Ok(())
}

#[expect(
    clippy::cast_precision_loss,
    reason = "centroid placement uses index-derived floating-point angles"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "centroid placement uses trigonometric expressions"
)]
fn centroids(config: &BlobConfig, rng: &mut SmallRng) -> Vec<Vec<f64>> {
    (0..config.cluster_count)
        .map(|cluster_index| {
            let angle = (cluster_index as f64 / config.cluster_count as f64) * (2.0 * PI);
            let mut centroid = vec![0.0_f64; config.dimensions];
            if let Some(value) = centroid.get_mut(0) {
                *value = config.separation * angle.cos();
            }
            if let Some(value) = centroid.get_mut(1) {
                *value = config.separation * angle.sin();
            }
            for value in centroid.iter_mut().skip(2) {
                *value = rng.gen_range((-0.1 * config.separation)..(0.1 * config.separation));
            }
            centroid
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "points are offset from their centroid"
)]
fn jitter(centroid: &[f64], spread: f64, rng: &mut SmallRng) -> Vec<f64> {
    centroid
        .iter()
        .map(|value| value + rng.gen_range(-spread..spread))
        .collect()
}
