use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use waygraph::{algorithms, Graph, SearchConfig, ShortestPathStrategy};

#[allow(dead_code)]
mod workloads;

fn to_petgraph(graph: &Graph<u32>) -> DiGraph<(), i32> {
    let mut out = DiGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        out.add_node(());
    }
    for edge in graph.edges() {
        out.add_edge(
            NodeIndex::new(edge.start_vertex().index()),
            NodeIndex::new(edge.final_vertex().index()),
            edge.weight(),
        );
    }
    out
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path_vs_petgraph");
    group.sample_size(10);

    for n in [128u32, 512] {
        let graph = workloads::lattice(n);
        let oracle = to_petgraph(&graph);
        let end = n - 1;

        let linear = SearchConfig::with_strategy(ShortestPathStrategy::LinearScan);
        group.bench_with_input(BenchmarkId::new("linear_scan", n), &n, |b, _| {
            b.iter(|| black_box(algorithms::shortest_weight_with(&graph, &0, &end, &linear).ok()));
        });

        let heap = SearchConfig::with_strategy(ShortestPathStrategy::BinaryHeap);
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &n, |b, _| {
            b.iter(|| black_box(algorithms::shortest_weight_with(&graph, &0, &end, &heap).ok()));
        });

        group.bench_with_input(BenchmarkId::new("petgraph_dijkstra", n), &n, |b, _| {
            let goal = NodeIndex::new(end as usize);
            b.iter(|| black_box(dijkstra(&oracle, NodeIndex::new(0), Some(goal), |e| *e.weight()).get(&goal).copied()));
        });
    }

    group.finish();
}

fn bench_graph_build(c: &mut Criterion) {
    c.bench_function("lattice_build_1024", |b| {
        b.iter(|| black_box(workloads::lattice(black_box(1_024)).edge_count()));
    });
}

criterion_group!(benches, bench_shortest_path, bench_graph_build);
criterion_main!(benches);
