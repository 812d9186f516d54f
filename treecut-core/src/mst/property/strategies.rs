//! Graph generators for spanning tree property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing proptest
//! case can be replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WeightedGraph;

use super::enumeration::MAX_ENUMERATED_EDGES;
use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 8;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay smaller so the edge count remains manageable.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across every weight distribution, biased towards
/// [`WeightDistribution::ManyIdentical`] because it exercises tie-breaking.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates graphs small enough for exhaustive spanning tree enumeration.
///
/// Weights are small integers so ties are frequent and sums are exact.
pub(super) fn tiny_graph_strategy() -> impl Strategy<Value = WeightedGraph> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertex_count = rng.gen_range(2..=6);
        let mut builder = GraphBuilder::new(vertex_count);
        let mut order: Vec<usize> = (0..vertex_count).collect();
        shuffle(&mut order, &mut rng);
        for pair in order.windows(2) {
            builder.push(pair[0], pair[1], f64::from(rng.gen_range(0_u8..=4)));
        }
        let extra = rng.gen_range(0..=MAX_ENUMERATED_EDGES - (vertex_count - 1));
        for _ in 0..extra {
            let left = rng.gen_range(0..vertex_count);
            let right = rng.gen_range(0..vertex_count);
            if left != right {
                builder.push(left, right, f64::from(rng.gen_range(0_u8..=4)));
            }
        }
        builder.graph
    })
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let graph = match distribution {
        WeightDistribution::Unique => {
            probabilistic_graph(rng, MAX_VERTICES, (0.2, 0.6), |r| r.gen_range(0.1..100.0))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic_graph(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Dense => {
            probabilistic_graph(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| {
                r.gen_range(0.1..100.0)
            })
        }
        WeightDistribution::Disconnected => disconnected_graph(rng),
    };
    MstFixture {
        graph,
        distribution,
    }
}

/// Adds each vertex pair with a probability sampled from `probability`.
fn probabilistic_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> WeightedGraph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut builder = GraphBuilder::new(vertex_count);
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let value = weight(rng);
                builder.push(left, right, value);
            }
        }
    }
    builder.graph
}

/// Random spanning path plus roughly `0.5n` to `n` extra edges.
fn sparse_graph(rng: &mut SmallRng) -> WeightedGraph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = GraphBuilder::new(vertex_count);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        let weight = rng.gen_range(0.1..100.0);
        builder.push(pair[0], pair[1], weight);
    }
    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            let weight = rng.gen_range(0.1..100.0);
            builder.push(left, right, weight);
        }
    }
    builder.graph
}

/// Two to five components, each internally connected by a random path.
fn disconnected_graph(rng: &mut SmallRng) -> WeightedGraph {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(2..=10))
        .collect();
    let mut builder = GraphBuilder::new(sizes.iter().sum());
    let mut offset = 0;
    for size in sizes {
        for vertex in offset + 1..offset + size {
            let weight = rng.gen_range(0.1..100.0);
            builder.push(vertex - 1, vertex, weight);
        }
        for _ in 0..size {
            let left = offset + rng.gen_range(0..size);
            let right = offset + rng.gen_range(0..size);
            if left != right {
                let weight = rng.gen_range(0.1..100.0);
                builder.push(left, right, weight);
            }
        }
        offset += size;
    }
    builder.graph
}

struct GraphBuilder {
    graph: WeightedGraph,
}

impl GraphBuilder {
    fn new(vertex_count: usize) -> Self {
        Self {
            graph: WeightedGraph::new(vertex_count),
        }
    }

    fn push(&mut self, left: usize, right: usize, weight: f64) {
        self.graph
            .add_edge(left, right, weight)
            .expect("generated edges must be valid");
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
