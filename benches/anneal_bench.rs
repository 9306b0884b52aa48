//! Criterion benchmarks for graph construction and the annealing loop.
//!
//! Uses a synthetic chain problem (negative biases, positive nearest-neighbor
//! couplings) to measure pure solver overhead at several sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qubo_anneal::graph::QuboGraph;
use qubo_anneal::sa::{AnnealConfig, AnnealRunner};
use std::collections::HashMap;

/// Chain of `n` variables: bias -1 on each, coupling +2 between neighbors.
fn chain_coefficients(n: usize) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    for i in 0..n {
        map.insert(i.to_string(), -1.0);
        if i + 1 < n {
            map.insert(format!("{},{}", i, i + 1), 2.0);
        }
    }
    map
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for n in [100, 1_000, 10_000] {
        let coefficients = chain_coefficients(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &coefficients, |b, map| {
            b.iter(|| QuboGraph::from_coefficients(black_box(map)).unwrap());
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);
    for n in [50, 500] {
        let graph = QuboGraph::from_coefficients(&chain_coefficients(n)).unwrap();
        let config = AnnealConfig::default()
            .with_initial_temperature(5.0)
            .with_final_temperature(0.05)
            .with_cooling_factor(0.9)
            .with_sweeps_per_temperature(1_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| AnnealRunner::run(black_box(g), &config, |_| {}));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_anneal);
criterion_main!(benches);
