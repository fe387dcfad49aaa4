use criterion::{black_box, BenchmarkId, Criterion};
use waygraph::algorithms;

use super::lattice;

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");
    group.sample_size(10);

    let graph = lattice(32);

    for hops in [4usize, 6, 8] {
        group.bench_with_input(BenchmarkId::new("by_hops", hops), &hops, |b, &hops| {
            b.iter(|| black_box(algorithms::paths_by_hops(&graph, &0u32, &7u32, hops, false).map(|p| p.len())));
        });
        group.bench_with_input(BenchmarkId::new("by_exact_hops", hops), &hops, |b, &hops| {
            b.iter(|| black_box(algorithms::paths_by_hops(&graph, &0u32, &7u32, hops, true).map(|p| p.len())));
        });
    }

    for max_weight in [10i32, 15, 20] {
        group.bench_with_input(BenchmarkId::new("within_range", max_weight), &max_weight, |b, &w| {
            b.iter(|| black_box(algorithms::paths_within_range(&graph, &0u32, &7u32, w).map(|p| p.len())));
        });
    }

    group.finish();
}
