//! Workloads shared by the benchmark suite.

pub mod enumeration;
pub mod priority_queue;
pub mod shortest_path;

use waygraph::Graph;

/// Offsets of the outgoing edges of every vertex in [`lattice`].
const STRIDES: [u32; 3] = [1, 2, 5];

/// A ring lattice: vertex `i` links to `i + 1`, `i + 2` and `i + 5` (mod `n`),
/// with weights cycling through `1..=9`.
pub fn lattice(n: u32) -> Graph<u32> {
    let mut graph = Graph::with_capacity(n as usize, n as usize * STRIDES.len());
    for v in 0..n {
        graph.add_vertex(v).unwrap();
    }
    let mut label = 0;
    for v in 0..n {
        for (k, stride) in (0u32..).zip(STRIDES) {
            let to = (v + stride) % n;
            let weight = i32::try_from((v * 7 + k * 3) % 9 + 1).unwrap();
            // Tiny rings fold strides onto the same target; keep the first.
            if graph.add_edge(label, &v, &to, weight).is_ok() {
                label += 1;
            }
        }
    }
    graph
}
