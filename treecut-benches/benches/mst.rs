//! Minimum spanning tree benchmarks.
//!
//! Measures Prim's fringe growth over the complete Euclidean graph of a
//! synthetic point set. Graph derivation happens during setup so only tree
//! construction is timed.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use treecut_benches::{
    error::BenchSetupError,
    params::PipelineBenchParams,
    source::{BlobConfig, SyntheticBlobs},
};
use treecut_core::{WeightedGraph, prim_mst};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Point dimensionality for all benchmark datasets.
const DIMENSIONS: usize = 8;

/// Dataset sizes to benchmark.
const POINT_COUNTS: &[usize] = &[100, 250, 500];

/// Number of blobs in every dataset.
const CLUSTER_COUNT: usize = 5;

fn prim_mst_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("prim_mst");
    group.sample_size(20);

    for &point_count in POINT_COUNTS {
        let blobs = SyntheticBlobs::generate(&BlobConfig {
            point_count,
            dimensions: DIMENSIONS,
            cluster_count: CLUSTER_COUNT,
            separation: 20.0,
            spread: 1.0,
            seed: SEED,
        })?;
        let graph = WeightedGraph::from_points(blobs.points())?;

        let bench_params = PipelineBenchParams { point_count };

        group.bench_with_input(
            BenchmarkId::from_parameter(&bench_params),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let _tree = prim_mst(graph);
                });
            },
        );
    }

    group.finish();
    Ok(())
}

fn bench_prim_mst(c: &mut Criterion) {
    if let Err(err) = prim_mst_impl(c) {
        panic!("prim_mst benchmark setup failed: {err}");
    }
}

criterion_group!(benches, bench_prim_mst);
criterion_main!(benches);
