//! Materialized walks through a [`Graph`].

use core::fmt;

use super::digraph::Graph;
use super::edge::{Edge, EdgeId};
use super::render;
use super::vertex::{Vertex, VertexId};
use crate::error::{GraphError, Result};

/// An ordered walk: `n` vertices joined by the `n - 1` edges between them.
///
/// Vertices may repeat. A path borrows the graph it walks through and only
/// stores arena ids.
pub struct Path<'g, T> {
    graph: &'g Graph<T>,
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl<'g, T: fmt::Display> Path<'g, T> {
    /// Builds a path from consecutive edges.
    ///
    /// The vertex sequence is the start vertex of every edge followed by the
    /// final vertex of the last one.
    ///
    /// # Errors
    /// - [`GraphError::EmptyPath`] if `edges` is empty.
    /// - [`GraphError::InvalidArgument`] if an id does not belong to `graph`.
    /// - [`GraphError::DisconnectedPath`] if an edge does not start where the previous one ends.
    pub fn from_edges(graph: &'g Graph<T>, edges: &[EdgeId]) -> Result<Self> {
        let Some(&last) = edges.last() else {
            return Err(GraphError::EmptyPath {
                required: 1,
                found: 0,
            });
        };

        let mut resolved = Vec::with_capacity(edges.len());
        for &id in edges {
            let edge = graph
                .edge_at(id)
                .ok_or_else(|| GraphError::invalid_argument(format!("unknown edge id {id}")))?;
            resolved.push(edge);
        }

        for pair in resolved.windows(2) {
            if pair[0].final_vertex() != pair[1].start_vertex() {
                return Err(GraphError::DisconnectedPath {
                    from: graph.vertex_slot(pair[0].final_vertex()).label().to_string(),
                    to: graph.vertex_slot(pair[1].start_vertex()).label().to_string(),
                });
            }
        }

        let mut vertices: Vec<VertexId> = resolved.iter().map(|e| e.start_vertex()).collect();
        vertices.push(graph.edge_slot(last).final_vertex());

        Ok(Self {
            graph,
            vertices,
            edges: edges.to_vec(),
        })
    }

    /// Builds a path from consecutive vertices, looking up the edge between
    /// every pair.
    ///
    /// # Errors
    /// - [`GraphError::EmptyPath`] if fewer than two vertices are given.
    /// - [`GraphError::InvalidArgument`] if an id does not belong to `graph`.
    /// - [`GraphError::DisconnectedPath`] if a vertex has no edge to its successor.
    pub fn from_vertices(graph: &'g Graph<T>, vertices: &[VertexId]) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(GraphError::EmptyPath {
                required: 2,
                found: vertices.len(),
            });
        }

        for &id in vertices {
            if graph.vertex_at(id).is_none() {
                return Err(GraphError::invalid_argument(format!("unknown vertex id {id}")));
            }
        }

        let mut edges = Vec::with_capacity(vertices.len() - 1);
        for pair in vertices.windows(2) {
            let start = graph.vertex_slot(pair[0]);
            let edge = start.edge_to(pair[1]).ok_or_else(|| GraphError::DisconnectedPath {
                from: start.label().to_string(),
                to: graph.vertex_slot(pair[1]).label().to_string(),
            })?;
            edges.push(edge);
        }

        Ok(Self {
            graph,
            vertices: vertices.to_vec(),
            edges,
        })
    }
}

impl<'g, T> Path<'g, T> {
    /// Assembles a path from a walk the caller already followed edge by edge.
    pub(crate) fn from_walk(graph: &'g Graph<T>, vertices: Vec<VertexId>, edges: Vec<EdgeId>) -> Self {
        debug_assert_eq!(vertices.len(), edges.len() + 1, "walk must have one more vertex than edges");
        Self {
            graph,
            vertices,
            edges,
        }
    }

    /// Returns the graph this path walks through.
    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    /// Returns the vertices in walk order.
    pub fn vertices(&self) -> Vec<&'g Vertex<T>> {
        self.vertices.iter().map(|&id| self.graph.vertex_slot(id)).collect()
    }

    /// Returns the edges in walk order.
    pub fn edges(&self) -> Vec<&'g Edge<T>> {
        self.edges.iter().map(|&id| self.graph.edge_slot(id)).collect()
    }

    /// Returns the vertex ids in walk order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the edge ids in walk order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the vertex labels in walk order.
    pub fn labels(&self) -> Vec<&'g T> {
        self.vertices.iter().map(|&id| self.graph.vertex_slot(id).label()).collect()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges (hops).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the edge weights; `0` for a cleared path.
    ///
    /// Saturates at `i32::MAX`. Use [`Path::checked_weight`] to detect that.
    pub fn weight(&self) -> i32 {
        self.edge_weights().fold(0, i32::saturating_add)
    }

    /// Returns the sum of the edge weights.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] if the sum does not fit in an `i32`.
    pub fn checked_weight(&self) -> Result<i32> {
        self.edge_weights()
            .try_fold(0i32, i32::checked_add)
            .ok_or_else(|| GraphError::invalid_argument("path weight overflows i32"))
    }

    fn edge_weights(&self) -> impl Iterator<Item = i32> + '_ {
        self.edges.iter().map(|&id| self.graph.edge_slot(id).weight())
    }

    /// Removes every vertex and edge from the path.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}

impl<T> Clone for Path<'_, T> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<T> PartialEq for Path<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph) && self.vertices == other.vertices && self.edges == other.edges
    }
}

impl<T> Eq for Path<'_, T> {}

impl<T: fmt::Display> fmt::Display for Path<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_blocks(
            f,
            self.graph,
            self.vertices.iter().map(|&id| self.graph.vertex_slot(id)),
            self.edges.iter().map(|&id| self.graph.edge_slot(id)),
        )
    }
}

impl<T> fmt::Debug for Path<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
