//! Weight statistics over edge sets: mean, mean square and the coefficient
//! of variation used by the threshold strategy.

use crate::Edge;

/// Summary statistics of a set of edge weights.
///
/// Moments are accumulated relative to the largest weight seen, so weights
/// whose squares exceed `f64::MAX` still produce a finite coefficient of
/// variation.
///
/// # Examples
/// ```
/// use treecut_core::{EdgeStatistics, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(0, 1, 2.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// let stats = EdgeStatistics::from_edges(graph.edges());
/// assert_eq!(stats.mean(), 2.0);
/// assert_eq!(stats.coefficient_of_variation(), Some(0.0));
/// # Ok::<(), treecut_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStatistics {
    count: usize,
    scale: f64,
    scaled_mean: f64,
    scaled_mean_square: f64,
    uniform: bool,
}

/// Running sums of `weight / scale` and its square, where `scale` is the
/// largest weight pushed so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScaledMoments {
    count: usize,
    scale: f64,
    sum: f64,
    square_sum: f64,
}

impl ScaledMoments {
    fn push(&mut self, weight: f64) {
        if weight > self.scale {
            let ratio = self.scale / weight;
            self.sum *= ratio;
            self.square_sum *= ratio * ratio;
            self.scale = weight;
        }
        if self.scale > 0.0 {
            let scaled = weight / self.scale;
            self.sum += scaled;
            self.square_sum += scaled * scaled;
        }
        self.count += 1;
    }

    fn statistics(&self, uniform: bool) -> EdgeStatistics {
        if self.count == 0 {
            return EdgeStatistics {
                count: 0,
                scale: 0.0,
                scaled_mean: 0.0,
                scaled_mean_square: 0.0,
                uniform: true,
            };
        }
        let n = self.count as f64;
        EdgeStatistics {
            count: self.count,
            scale: self.scale,
            scaled_mean: self.sum / n,
            scaled_mean_square: self.square_sum / n,
            uniform,
        }
    }
}

impl EdgeStatistics {
    /// Computes statistics over `edges` in any order.
    #[must_use]
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut moments = ScaledMoments::default();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for edge in edges {
            let weight = edge.weight();
            moments.push(weight);
            min = min.min(weight);
            max = max.max(weight);
        }
        moments.statistics(min == max)
    }

    /// Returns the number of edges summarised.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.count }

    /// Returns the mean weight, `0.0` for an empty set.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.scaled_mean * self.scale
    }

    /// Returns the mean of the squared weights.
    ///
    /// Saturates to infinity when the true value exceeds `f64::MAX`.
    #[must_use]
    pub fn mean_square(&self) -> f64 {
        self.scaled_mean_square * self.scale * self.scale
    }

    /// Returns the population variance `mean_square − mean²`.
    ///
    /// The result is clamped at zero, and is exactly zero when every weight
    /// is identical.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.scaled_variance() * self.scale * self.scale
    }

    /// Returns `sqrt(variance) / mean`, or `None` when the mean is zero and
    /// the ratio is undefined.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        (self.scaled_mean != 0.0).then(|| self.scaled_variance().sqrt() / self.scaled_mean)
    }

    fn scaled_variance(&self) -> f64 {
        if self.uniform {
            0.0
        } else {
            (self.scaled_mean_square - self.scaled_mean * self.scaled_mean).max(0.0)
        }
    }
}

/// Running moments over edges sorted ascending by weight, answering
/// [`EdgeStatistics`] for any prefix in constant time.
pub(super) struct SortedPrefixStatistics<'a> {
    edges: &'a [Edge],
    moments: Vec<ScaledMoments>,
}

impl<'a> SortedPrefixStatistics<'a> {
    pub(super) fn new(edges: &'a [Edge]) -> Self {
        let mut moments = Vec::with_capacity(edges.len() + 1);
        let mut running = ScaledMoments::default();
        moments.push(running);
        for edge in edges {
            running.push(edge.weight());
            moments.push(running);
        }
        Self { edges, moments }
    }

    /// Statistics of the `len` lightest edges.
    pub(super) fn prefix(&self, len: usize) -> EdgeStatistics {
        let heaviest = len.checked_sub(1).and_then(|last| self.edges.get(last));
        let uniform = match (self.edges.first(), heaviest) {
            (Some(first), Some(last)) => first.weight() == last.weight(),
            _ => true,
        };
        self.moments
            .get(len)
            .copied()
            .unwrap_or_default()
            .statistics(uniform)
    }
}
