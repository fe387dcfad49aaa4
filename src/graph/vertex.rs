//! Graph vertices and their outgoing adjacency.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use super::edge::EdgeId;

/// Index of a vertex inside the [`Graph`](super::Graph) that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// One outgoing edge as seen from its start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    /// The edge.
    pub edge: EdgeId,
    /// The vertex the edge ends at.
    pub target: VertexId,
}

/// A labelled graph node.
///
/// The outgoing list keeps insertion order and never holds two edges ending at
/// the same vertex. Vertices are equal when their labels are equal.
pub struct Vertex<T> {
    label: T,
    outgoing: Vec<Adjacency>,
    visited: AtomicBool,
}

impl<T> Vertex<T> {
    pub(crate) fn new(label: T) -> Self {
        Self {
            label,
            outgoing: Vec::new(),
            visited: AtomicBool::new(false),
        }
    }

    /// Returns the label.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the outgoing adjacency in insertion order.
    pub fn outgoing(&self) -> &[Adjacency] {
        &self.outgoing
    }

    /// Returns the ids of the outgoing edges in insertion order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.outgoing.iter().map(|adj| adj.edge).collect()
    }

    /// Returns the number of outgoing edges.
    pub fn edge_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns `true` if `edge` leaves this vertex.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.outgoing.iter().any(|adj| adj.edge == edge)
    }

    /// Returns `true` if an outgoing edge ends at `target`.
    pub fn is_linked_to(&self, target: VertexId) -> bool {
        self.edge_to(target).is_some()
    }

    /// Returns the outgoing edge that ends at `target`, if any.
    pub fn edge_to(&self, target: VertexId) -> Option<EdgeId> {
        self.outgoing
            .iter()
            .find(|adj| adj.target == target)
            .map(|adj| adj.edge)
    }

    /// Returns the visited mark.
    pub fn is_visited(&self) -> bool {
        self.visited.load(Ordering::Relaxed)
    }

    /// Sets the visited mark.
    pub fn mark_visited(&self) {
        self.visited.store(true, Ordering::Relaxed);
    }

    pub(crate) fn reset_visited(&self) {
        self.visited.store(false, Ordering::Relaxed);
    }

    /// Appends an outgoing edge. Returns `false` (and leaves the list untouched)
    /// if an edge to `target` already exists.
    pub(crate) fn add_edge(&mut self, edge: EdgeId, target: VertexId) -> bool {
        if self.is_linked_to(target) {
            return false;
        }
        self.outgoing.push(Adjacency { edge, target });
        true
    }
}

impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for Vertex<T> {}

impl<T: fmt::Debug> fmt::Debug for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("label", &self.label)
            .field("outgoing", &self.outgoing)
            .field("visited", &self.is_visited())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_is_unvisited_and_isolated() {
        let vertex = Vertex::new(10);
        assert_eq!(*vertex.label(), 10);
        assert_eq!(vertex.edge_count(), 0);
        assert!(!vertex.is_visited());
    }

    #[test]
    fn visited_mark_round_trip() {
        let vertex = Vertex::new("label");
        vertex.mark_visited();
        assert!(vertex.is_visited());
        vertex.reset_visited();
        assert!(!vertex.is_visited());
    }

    #[test]
    fn equality_is_by_label() {
        assert_eq!(Vertex::new("Obla-Di"), Vertex::new("Obla-Di"));
        assert_ne!(Vertex::new("Obla-Di"), Vertex::new("obla-di"));
        assert_ne!(Vertex::new(10), Vertex::new(20));
    }

    #[test]
    fn rejects_second_edge_to_same_target() {
        let mut vertex = Vertex::new("A");
        assert!(vertex.add_edge(EdgeId(0), VertexId(1)));
        assert!(vertex.add_edge(EdgeId(1), VertexId(2)));
        assert!(!vertex.add_edge(EdgeId(2), VertexId(1)));

        assert_eq!(vertex.edge_ids(), vec![EdgeId(0), EdgeId(1)]);
        assert!(vertex.contains_edge(EdgeId(1)));
        assert!(!vertex.contains_edge(EdgeId(2)));
        assert!(vertex.is_linked_to(VertexId(2)));
        assert!(!vertex.is_linked_to(VertexId(3)));
        assert_eq!(vertex.edge_to(VertexId(1)), Some(EdgeId(0)));
    }
}
