//! Criterion benchmarks for neighborhood-graph builders.
//! Focus sizes: n in {250, 1000, 4000} points on the (2, 1) torus, epsilon 0.3.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p cloudgraph

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cloudgraph::cloud::rand::torus;
use cloudgraph::graph::{build_exact, build_subdivision, DepthLimit, SubdivisionCfg};
use cloudgraph::select::select;

const EPS: f64 = 0.3;

fn bench_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood_graph");
    for &n in &[250usize, 1000, 4000] {
        let cloud = torus(n, 42).unwrap();
        group.bench_with_input(BenchmarkId::new("exact", n), &cloud, |b, pts| {
            b.iter(|| build_exact(pts, EPS).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("subdivision", n), &cloud, |b, pts| {
            b.iter(|| build_subdivision(pts, EPS, SubdivisionCfg::default()).unwrap())
        });
        let hybrid = SubdivisionCfg {
            depth: DepthLimit::Levels(6),
            ..SubdivisionCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("subdivision_depth6", n), &cloud, |b, pts| {
            b.iter(|| build_subdivision(pts, EPS, hybrid).unwrap())
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_median");
    for &n in &[1000usize, 10_000, 100_000] {
        let cloud = torus(n, 43).unwrap();
        group.bench_with_input(BenchmarkId::new("axis0", n), &cloud, |b, pts| {
            b.iter(|| select(pts.points(), n / 2, 0).unwrap().id())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graphs, bench_select);
criterion_main!(benches);
