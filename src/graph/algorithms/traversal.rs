//! Breadth-first traversal and reachability.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use std::collections::VecDeque;

use super::endpoints;
use crate::graph::digraph::Graph;
use crate::graph::vertex::VertexId;
use crate::graph::Label;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex ids in BFS order, following outgoing edges in insertion order.
/// Uses its own visited bitmap, so it does not touch the graph's visited flags.
pub struct Bfs<'g, T> {
    graph: &'g Graph<T>,
    visited: Vec<bool>,
    queue: VecDeque<VertexId>,
}

impl<'g, T> Bfs<'g, T> {
    /// Creates a BFS iterator that yields `start` first.
    ///
    /// An id that does not belong to `graph` yields nothing.
    pub fn new(graph: &'g Graph<T>, start: VertexId) -> Self {
        let len = graph.vertex_count();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start.index() < len {
            visited[start.index()] = true;
            queue.push_back(start);
        }

        Self { graph, visited, queue }
    }

    /// Creates a BFS iterator over the vertices reachable from `start` through
    /// at least one edge.
    ///
    /// `start` itself is yielded only if it lies on a cycle.
    pub fn successors(graph: &'g Graph<T>, start: VertexId) -> Self {
        let mut bfs = Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            queue: VecDeque::new(),
        };
        if let Some(vertex) = graph.vertex_at(start) {
            bfs.enqueue_targets(vertex.outgoing().iter().map(|adj| adj.target));
        }
        bfs
    }

    fn enqueue_targets(&mut self, targets: impl Iterator<Item = VertexId>) {
        for v in targets {
            if !self.visited[v.index()] {
                self.visited[v.index()] = true;
                self.queue.push_back(v);
            }
        }
    }
}

impl<T> Iterator for Bfs<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        let graph = self.graph;
        self.enqueue_targets(graph.vertex_slot(u).outgoing().iter().map(|adj| adj.target));
        Some(u)
    }
}

/// Returns `true` if a walk of at least one edge leads from `start` to `end`.
///
/// For `start == end` this asks whether `start` lies on a cycle. Unknown labels
/// are never reachable.
///
/// Edge weights are ignored. A reachable vertex can still fail
/// [`shortest_weight`](super::shortest_weight) when its distance reaches the
/// configured sentinel.
pub fn is_reachable<T, Q>(graph: &Graph<T>, start: &Q, end: &Q) -> bool
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let Ok((from, to)) = endpoints(graph, start, end) else {
        return false;
    };
    let reachable = Bfs::successors(graph, from).any(|v| v == to);
    tracing::debug!(start = %start, end = %end, reachable, "reachability");
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_loop() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label).unwrap();
        }
        graph.add_edge("AB", "A", "B", 1).unwrap();
        graph.add_edge("AC", "A", "C", 1).unwrap();
        graph.add_edge("BD", "B", "D", 1).unwrap();
        graph.add_edge("DB", "D", "B", 1).unwrap();
        graph
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let graph = chain_with_loop();
        let start = graph.vertex_id("A").unwrap();
        let order: Vec<_> = Bfs::new(&graph, start).map(|v| *graph.vertex_slot(v).label()).collect();
        assert_eq!(order, ["A", "B", "C", "D"]);
    }

    #[test]
    fn successors_skip_the_start_unless_on_a_cycle() {
        let graph = chain_with_loop();
        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        assert!(!Bfs::successors(&graph, a).any(|v| v == a));
        assert!(Bfs::successors(&graph, b).any(|v| v == b));
    }

    #[test]
    fn bfs_from_foreign_id_is_empty() {
        let graph = chain_with_loop();
        assert_eq!(Bfs::new(&graph, VertexId(17)).count(), 0);
        assert_eq!(Bfs::successors(&graph, VertexId(17)).count(), 0);
    }

    #[test]
    fn reachability() {
        let graph = chain_with_loop();
        assert!(is_reachable(&graph, "A", "D"));
        assert!(is_reachable(&graph, "D", "D"));
        assert!(!is_reachable(&graph, "A", "A"));
        assert!(!is_reachable(&graph, "C", "A"));
        assert!(!is_reachable(&graph, "A", "Z"));
    }
}
