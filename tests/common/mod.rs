#![allow(dead_code)]

use waygraph::{Graph, Path};

/// The nine-edge town map: AB5, AD5, AE7, BC4, CD8, CE2, DC8, DE6, EB3.
pub const TOWN_EDGES: [(&str, &str, &str, i32); 9] = [
    ("AB", "A", "B", 5),
    ("AD", "A", "D", 5),
    ("AE", "A", "E", 7),
    ("BC", "B", "C", 4),
    ("CD", "C", "D", 8),
    ("CE", "C", "E", 2),
    ("DC", "D", "C", 8),
    ("DE", "D", "E", 6),
    ("EB", "E", "B", 3),
];

pub const TOWNS: [&str; 5] = ["A", "B", "C", "D", "E"];

pub fn towns() -> Graph<&'static str> {
    let mut graph = Graph::with_capacity(TOWNS.len(), TOWN_EDGES.len());
    for town in TOWNS {
        graph.add_vertex(town).unwrap();
    }
    for (label, from, to, weight) in TOWN_EDGES {
        graph.add_edge(label, from, to, weight).unwrap();
    }
    graph
}

/// Concatenated vertex labels, e.g. `"ABC"`.
pub fn spell(path: &Path<'_, &'static str>) -> String {
    path.labels().into_iter().copied().collect()
}

pub fn spell_all(paths: &[Path<'_, &'static str>]) -> Vec<String> {
    paths.iter().map(spell).collect()
}

/// Routes `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
