//! A label-indexed, directed, weighted graph.
//!
//! Vertices and edges live in two dense arenas owned by the graph; every
//! cross-reference (edge endpoints, a vertex's outgoing list) is an index into
//! those arenas. Two hash indexes map labels to arena slots.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use super::edge::{Edge, EdgeId};
use super::render::{self, EdgeDisplay, VertexDisplay};
use super::vertex::{Vertex, VertexId};
use super::Label;
use crate::error::{GraphError, Result};

/// A directed graph with labelled vertices and labelled, positively weighted edges.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to the vertex arena |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks the start vertex for an existing link |
/// | `vertex` / `edge` | \(O(1)\) | Hash lookup by label |
/// | `edge_between` | \(O(\text{out-degree})\) | Scans the start vertex's adjacency |
/// | `reset` | \(O(n)\) | Clears every visited flag |
///
/// ```
/// use waygraph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertex("A").unwrap();
/// graph.add_vertex("B").unwrap();
/// graph.add_edge("AB", "A", "B", 5).unwrap();
///
/// assert_eq!(graph.edge_between("A", "B").map(|e| e.weight()), Some(5));
/// assert!(graph.edge_between("B", "A").is_none());
/// ```
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge<T>>,
    vertex_index: HashMap<T, VertexId>,
    edge_index: HashMap<T, EdgeId>,
}

impl<T: Label> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty graph with room for the given number of vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            vertex_index: HashMap::with_capacity(vertices),
            edge_index: HashMap::with_capacity(edges),
        }
    }

    /// Adds a vertex identified by `label`.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateVertex`] if the label is already in use.
    /// - [`GraphError::InvalidArgument`] if the label renders as an empty string.
    pub fn add_vertex(&mut self, label: T) -> Result<VertexId> {
        check_label(&label, "vertex")?;
        if self.vertex_index.contains_key(&label) {
            return Err(GraphError::DuplicateVertex {
                label: label.to_string(),
            });
        }

        let id = VertexId(self.vertices.len());
        tracing::trace!(label = %label, id = id.index(), "add vertex");
        self.vertex_index.insert(label.clone(), id);
        self.vertices.push(Vertex::new(label));
        Ok(id)
    }

    /// Adds a directed edge from `start_label` to `final_label`.
    ///
    /// The edge is registered on the start vertex only. Every check runs before
    /// the graph is touched, so a failed call leaves it unchanged.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] for an empty label or a non-positive weight.
    /// - [`GraphError::UnknownVertex`] if either endpoint does not exist.
    /// - [`GraphError::DuplicateEdgeLabel`] if the edge label is already in use.
    /// - [`GraphError::DuplicateEdge`] if the start vertex already links to the final vertex.
    pub fn add_edge<Q>(&mut self, label: T, start_label: &Q, final_label: &Q, weight: i32) -> Result<EdgeId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        check_label(&label, "edge")?;
        let start = self.require_vertex(start_label)?;
        let end = self.require_vertex(final_label)?;
        let edge = Edge::new(label, weight, start, end)?;

        if self.edge_index.contains_key::<T>(edge.label()) {
            return Err(GraphError::DuplicateEdgeLabel {
                label: edge.label().to_string(),
            });
        }
        if self.vertices[start.0].is_linked_to(end) {
            return Err(GraphError::DuplicateEdge {
                start: start_label.to_string(),
                end: final_label.to_string(),
            });
        }

        let id = EdgeId(self.edges.len());
        tracing::trace!(label = %edge.label(), start = %start_label, end = %final_label, weight, "add edge");
        self.vertices[start.0].add_edge(id, end);
        self.edge_index.insert(edge.label().clone(), id);
        self.edges.push(edge);
        Ok(id)
    }

    fn require_vertex<Q>(&self, label: &Q) -> Result<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.vertex_id(label).ok_or_else(|| GraphError::UnknownVertex {
            label: label.to_string(),
        })
    }

    /// Returns the vertex with the given label.
    pub fn vertex<Q>(&self, label: &Q) -> Option<&Vertex<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_id(label).map(|id| &self.vertices[id.0])
    }

    /// Returns the id of the vertex with the given label.
    pub fn vertex_id<Q>(&self, label: &Q) -> Option<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertex_index.get(label).copied()
    }

    /// Returns the edge with the given label.
    pub fn edge<Q>(&self, label: &Q) -> Option<&Edge<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge_id(label).map(|id| &self.edges[id.0])
    }

    /// Returns the id of the edge with the given label.
    pub fn edge_id<Q>(&self, label: &Q) -> Option<EdgeId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge_index.get(label).copied()
    }

    /// Returns the edge going from `start_label` to `final_label`.
    pub fn edge_between<Q>(&self, start_label: &Q, final_label: &Q) -> Option<&Edge<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.vertex_id(start_label)?;
        let end = self.vertex_id(final_label)?;
        self.vertices[start.0].edge_to(end).map(|id| &self.edges[id.0])
    }

    /// Returns the vertices whose labels appear in `labels`, in the order of
    /// `labels`. Labels without a vertex are skipped.
    pub fn vertices_by_labels<Q>(&self, labels: &[&Q]) -> Vec<&Vertex<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        labels.iter().filter_map(|label| self.vertex(*label)).collect()
    }
}

impl<T> Graph<T> {
    /// Returns the vertex stored at `id`.
    pub fn vertex_at(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Returns the edge stored at `id`.
    pub fn edge_at(&self, id: EdgeId) -> Option<&Edge<T>> {
        self.edges.get(id.0)
    }

    /// Returns every vertex in insertion order.
    ///
    /// The returned `Vec` is a fresh snapshot.
    pub fn vertices(&self) -> Vec<&Vertex<T>> {
        self.vertices.iter().collect()
    }

    /// Returns every edge in insertion order.
    pub fn edges(&self) -> Vec<&Edge<T>> {
        self.edges.iter().collect()
    }

    /// Iterates over `(id, vertex)` pairs in insertion order.
    pub fn vertex_entries(&self) -> impl Iterator<Item = (VertexId, &Vertex<T>)> + '_ {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }

    /// Iterates over `(id, edge)` pairs in insertion order.
    pub fn edge_entries(&self) -> impl Iterator<Item = (EdgeId, &Edge<T>)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Clears the visited flag of every vertex.
    pub fn reset(&self) {
        for vertex in &self.vertices {
            vertex.reset_visited();
        }
    }

    /// Removes every vertex and edge. Previously returned ids become dangling.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.vertex_index.clear();
        self.edge_index.clear();
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn vertex_slot(&self, id: VertexId) -> &Vertex<T> {
        &self.vertices[id.0]
    }

    pub(crate) fn edge_slot(&self, id: EdgeId) -> &Edge<T> {
        &self.edges[id.0]
    }

    /// Renders one vertex as `{label,{edge,edge}}`, or `None` for an id
    /// outside this graph.
    pub fn render_vertex(&self, id: VertexId) -> Option<VertexDisplay<'_, T>> {
        self.vertex_at(id).map(|vertex| VertexDisplay::new(self, vertex))
    }

    /// Renders one edge as `{label,weight,{start,final}}`, or `None` for an id
    /// outside this graph.
    pub fn render_edge(&self, id: EdgeId) -> Option<EdgeDisplay<'_, T>> {
        self.edge_at(id).map(|edge| EdgeDisplay::new(self, edge))
    }
}

fn check_label<T: fmt::Display>(label: &T, what: &str) -> Result<()> {
    if label.to_string().is_empty() {
        return Err(GraphError::invalid_argument(format!("{what} label must not be empty")));
    }
    Ok(())
}

impl<T: Label> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_blocks(f, self, self.vertices.iter(), self.edges.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
