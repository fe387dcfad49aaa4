//! Directed, weighted edges.

use core::fmt;

use super::vertex::VertexId;
use crate::error::{GraphError, Result};

/// Index of an edge inside the [`Graph`](super::Graph) that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed arc from a start vertex to a final vertex.
///
/// Equality compares the `(start, final)` pair only: two edges with different
/// labels or weights between the same ordered pair of vertices are equal. This
/// is what makes a second edge between the same pair a duplicate.
#[derive(Debug, Clone)]
pub struct Edge<T> {
    label: T,
    weight: i32,
    start: VertexId,
    end: VertexId,
}

impl<T> Edge<T> {
    /// Creates an edge.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if `weight` is not positive.
    pub fn new(label: T, weight: i32, start: VertexId, end: VertexId) -> Result<Self> {
        if weight <= 0 {
            return Err(GraphError::invalid_argument(format!(
                "edge weight must be positive, got {weight}"
            )));
        }
        Ok(Self {
            label,
            weight,
            start,
            end,
        })
    }

    /// Returns the label.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the weight, always positive.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns the vertex the edge leaves.
    pub fn start_vertex(&self) -> VertexId {
        self.start
    }

    /// Returns the vertex the edge reaches.
    pub fn final_vertex(&self) -> VertexId {
        self.end
    }

    /// Returns `true` if both edges connect the same ordered pair of vertices.
    pub fn same_endpoints(&self, other: &Edge<T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_endpoints(other)
    }
}

impl<T> Eq for Edge<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn rejects_non_positive_weight() {
        let err = Edge::new(0, 0, VertexId(0), VertexId(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(Edge::new(0, -3, VertexId(0), VertexId(1)).is_err());
    }

    #[test]
    fn accessors() {
        let edge = Edge::new("AB", 5, VertexId(0), VertexId(1)).unwrap();
        assert_eq!(*edge.label(), "AB");
        assert_eq!(edge.weight(), 5);
        assert_eq!(edge.start_vertex(), VertexId(0));
        assert_eq!(edge.final_vertex(), VertexId(1));
    }

    #[test]
    fn equality_ignores_label_and_weight() {
        let ab = Edge::new("AB", 5, VertexId(0), VertexId(1)).unwrap();
        let ab_again = Edge::new("XY", 9, VertexId(0), VertexId(1)).unwrap();
        let ba = Edge::new("BA", 5, VertexId(1), VertexId(0)).unwrap();

        assert_eq!(ab, ab_again);
        assert!(ab.same_endpoints(&ab_again));
        assert_ne!(ab, ba);
    }
}
