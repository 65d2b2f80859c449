//! # Bigraph Performance Benchmarks
//!
//! Scale tests for the adjacency core:
//! - Bulk construction from an edge stream
//! - Incremental edge insertion
//! - Second-order neighborhood queries
//! - Node deletion with renumbering
//! - Connectivity traversal

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bigraph::BipartiteGraph;

/// Deterministic synthetic edge set: every type-1 node links to `degree`
/// type-2 nodes, spread by a prime multiplier for distribution.
fn synthetic_edges(nr1: usize, nr2: usize, degree: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(nr1 * degree);
    for n1 in 0..nr1 {
        for k in 0..degree {
            edges.push((n1, (n1 * 7 + k * 13) % nr2));
        }
    }
    edges
}

fn bench_bulk_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_construction");
    for size in [100, 1_000, 10_000].iter() {
        let edges = synthetic_edges(*size, *size, 4);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                BipartiteGraph::from_edges(size, size, edges.iter().copied(), false).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");
    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(1_000));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let base = BipartiteGraph::from_edges(size, size, synthetic_edges(size, size, 4), false)
                .unwrap();
            b.iter(|| {
                let mut g = base.clone();
                for i in 0..1_000usize {
                    g.add_edge_unchecked((i * 3) % size, (i * 11) % size);
                }
                g
            });
        });
    }
    group.finish();
}

fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta");
    for degree in [4, 16, 64].iter() {
        let g =
            BipartiteGraph::from_edges(1_000, 1_000, synthetic_edges(1_000, 1_000, *degree), false)
                .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(degree), degree, |b, _| {
            b.iter(|| {
                for n1 in 0..100 {
                    black_box(g.delta1(n1, false));
                }
            });
        });
    }
    group.finish();
}

fn bench_erase_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_node");
    for size in [100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let base = BipartiteGraph::from_edges(size, size, synthetic_edges(size, size, 4), false)
                .unwrap();
            b.iter(|| {
                let mut g = base.clone();
                g.erase_node1(size / 2);
                g
            });
        });
    }
    group.finish();
}

fn bench_is_connected(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_connected");
    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let g = BipartiteGraph::from_edges(size, size, synthetic_edges(size, size, 4), false)
                .unwrap();
            b.iter(|| black_box(g.is_connected()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_construction,
    bench_edge_insertion,
    bench_delta,
    bench_erase_node,
    bench_is_connected
);
criterion_main!(benches);
