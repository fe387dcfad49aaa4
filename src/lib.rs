//! # `waygraph` - Directed Weighted Graph Engine
//!
//! A small engine for directed graphs whose vertices and edges are addressed by
//! label. Answers route questions over a borrowed graph: the cost of an exact
//! walk, the cheapest distance between two vertices, and every walk bounded by
//! hop count or by total weight.
//!
//! ## Key Features
//!
//! - **Label addressing**: any `Eq + Hash + Clone + Display` type labels vertices and edges
//! - **Arena storage**: vertices and edges live in dense arenas, cross-referenced by index
//! - **Read-only algorithms**: searches take `&Graph` and keep their state in per-call scratch
//! - **Pluggable shortest path**: linear-scan relaxation or a binary-heap queue, chosen by [`SearchConfig`]
//!
//! ## Architecture
//!
//! 1. **Graph** (`Graph<T>`):
//!    - Owns `Vec<Vertex<T>>` and `Vec<Edge<T>>`; [`VertexId`] and [`EdgeId`] index them
//!    - Two hash indexes resolve labels to ids
//!    - At most one edge per ordered vertex pair; edge labels are unique
//!
//! 2. **Path** (`Path<'g, T>`):
//!    - A walk of `n` vertices and `n - 1` edges borrowed from its graph
//!    - Built from edges or vertices, both checked for connectivity
//!
//! 3. **Algorithms** ([`algorithms`]):
//!    - Failures surface as [`GraphError::Route`] with the cause as `source`
//!    - Enumeration is depth-first and follows outgoing edges in insertion order
//!
//! 4. **Priority Queue** (`PriorityQueue<T>`):
//!    - Array-backed binary min-heap, also used by the heap strategy
//!
//! ## Example
//!
//! ```rust
//! use waygraph::{algorithms, Graph};
//!
//! let mut graph = Graph::new();
//! for city in ["A", "B", "C", "D", "E"] {
//!     graph.add_vertex(city).unwrap();
//! }
//! for (label, from, to, weight) in [
//!     ("AB", "A", "B", 5),
//!     ("AD", "A", "D", 5),
//!     ("AE", "A", "E", 7),
//!     ("BC", "B", "C", 4),
//!     ("CD", "C", "D", 8),
//!     ("CE", "C", "E", 2),
//!     ("DC", "D", "C", 8),
//!     ("DE", "D", "E", 6),
//!     ("EB", "E", "B", 3),
//! ] {
//!     graph.add_edge(label, from, to, weight).unwrap();
//! }
//!
//! assert_eq!(algorithms::path_weight(&graph, &["A", "B", "C"]).unwrap(), 9);
//! assert_eq!(algorithms::shortest_weight(&graph, "B", "B").unwrap(), 9);
//! assert_eq!(algorithms::paths_by_hops(&graph, "C", "C", 3, false).unwrap().len(), 2);
//! assert_eq!(algorithms::paths_within_range(&graph, "C", "C", 30).unwrap().len(), 7);
//! assert!(algorithms::path_weight(&graph, &["A", "E", "D"]).is_err());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;

pub use collections::PriorityQueue;
pub use config::{SearchConfig, ShortestPathStrategy};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::algorithms;
pub use graph::{Adjacency, Edge, EdgeId, Graph, Label, Path, Vertex, VertexId};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Ids are plain indices.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId>>() <= mem::size_of::<usize>() * 2);

    // One adjacency entry is an (edge, target) pair and nothing more.
    assert!(mem::size_of::<Adjacency>() == mem::size_of::<usize>() * 2);
};
