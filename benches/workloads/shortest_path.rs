use criterion::{black_box, BenchmarkId, Criterion};
use waygraph::{algorithms, SearchConfig, ShortestPathStrategy};

use super::lattice;

/// Graph sizes measured by [`run`].
pub const SIZES: [u32; 3] = [64, 256, 1_024];

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(2));
    group.sample_size(10);

    for n in SIZES {
        let graph = lattice(n);
        let end = n / 2;
        for (name, strategy) in [
            ("linear_scan", ShortestPathStrategy::LinearScan),
            ("binary_heap", ShortestPathStrategy::BinaryHeap),
        ] {
            let config = SearchConfig::with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                b.iter(|| black_box(algorithms::shortest_weight_with(&graph, &0, &end, &config).ok()));
            });
        }
    }

    group.finish();
}
