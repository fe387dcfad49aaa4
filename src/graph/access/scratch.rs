//! Per-call scratch state for graph algorithms.
//!
//! Everything an algorithm writes while it runs lives in one of these buffers,
//! indexed by arena position, and is dropped when the call returns:
//! - `DistanceTable`: tentative distance per vertex
//! - `WorkingSet`: vertices not yet settled by the linear-scan relaxation
//! - `WalkStack`: the vertex and edge stacks of a depth-first enumeration

use crate::graph::digraph::Graph;
use crate::graph::edge::EdgeId;
use crate::graph::path::Path;
use crate::graph::vertex::VertexId;

/// Tentative distances, one slot per vertex.
pub(crate) struct DistanceTable {
    dist: Vec<i32>,
}

impl DistanceTable {
    pub(crate) fn new(len: usize, fill: i32) -> Self {
        Self {
            dist: vec![fill; len],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline(always)]
    pub(crate) fn get(&self, node: VertexId) -> i32 {
        self.dist[node.0]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, node: VertexId, weight: i32) {
        self.dist[node.0] = weight;
    }
}

/// Unsettled vertices in graph insertion order.
pub(crate) struct WorkingSet {
    members: Vec<VertexId>,
}

impl WorkingSet {
    /// A working set holding every vertex of a graph with `len` vertices.
    pub(crate) fn full(len: usize) -> Self {
        Self {
            members: (0..len).map(VertexId).collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes and returns the member with the smallest distance.
    ///
    /// Ties go to the member that comes first in insertion order.
    pub(crate) fn take_min(&mut self, dist: &DistanceTable) -> Option<VertexId> {
        let (pos, _) = self
            .members
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, i32)>, (pos, &node)| {
                let weight = dist.get(node);
                match best {
                    Some((_, w)) if w <= weight => best,
                    _ => Some((pos, weight)),
                }
            })?;
        Some(self.members.remove(pos))
    }
}

/// The walk a depth-first enumeration is currently standing on.
///
/// `vertices` always holds one more entry than `edges`.
pub(crate) struct WalkStack {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl WalkStack {
    pub(crate) fn new(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
        }
    }

    /// Number of vertices on the stack, the start vertex included.
    #[inline(always)]
    pub(crate) fn depth(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub(crate) fn push(&mut self, edge: EdgeId, target: VertexId) {
        self.edges.push(edge);
        self.vertices.push(target);
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        if self.edges.pop().is_some() {
            self.vertices.pop();
        }
    }

    /// Copies the current walk into a [`Path`].
    pub(crate) fn snapshot<'g, T>(&self, graph: &'g Graph<T>) -> Path<'g, T> {
        Path::from_walk(graph, self.vertices.clone(), self.edges.clone())
    }
}
