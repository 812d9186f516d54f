//! Benchmark parameter types.
//!
//! Each type renders as the Criterion benchmark id of one run.

use std::fmt;

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Debug)]
pub struct PipelineBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
}

impl fmt::Display for PipelineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a fixed-count extraction benchmark run.
#[derive(Clone, Debug)]
pub struct CountBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Number of clusters requested.
    pub cluster_count: usize,
}

impl fmt::Display for CountBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.cluster_count)
    }
}

/// Parameters for a variation-driven extraction benchmark run.
#[derive(Clone, Debug)]
pub struct VariationBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Coefficient-of-variation threshold.
    pub threshold: f64,
}

impl fmt::Display for VariationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},cv={}", self.point_count, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn ids_render_every_parameter() {
        let pipeline = PipelineBenchParams { point_count: 250 };
        let count = CountBenchParams {
            point_count: 250,
            cluster_count: 4,
        };
        let variation = VariationBenchParams {
            point_count: 250,
            threshold: 0.5,
        };
        assert_eq!(pipeline.to_string(), "n=250");
        assert_eq!(count.to_string(), "n=250,k=4");
        assert_eq!(variation.to_string(), "n=250,cv=0.5");
    }
}
