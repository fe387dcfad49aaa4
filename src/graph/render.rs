//! Text rendering shared by [`Graph`] and [`Path`](super::Path).
//!
//! ```text
//! {
//!     {A,{AB,AD}}
//!     {B}
//! }
//! {
//!     {AB,5,{A,B}}
//! }
//! ```

use core::fmt;

use super::digraph::Graph;
use super::edge::Edge;
use super::vertex::Vertex;

const INDENT: &str = "    ";

/// Renders a vertex as `{label,{edge,edge}}`, or `{label}` without outgoing edges.
pub struct VertexDisplay<'a, T> {
    graph: &'a Graph<T>,
    vertex: &'a Vertex<T>,
}

impl<'a, T> VertexDisplay<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, vertex: &'a Vertex<T>) -> Self {
        Self { graph, vertex }
    }
}

impl<T: fmt::Display> fmt::Display for VertexDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.vertex.label())?;
        let outgoing = self.vertex.outgoing();
        if !outgoing.is_empty() {
            f.write_str(",{")?;
            for (i, adj) in outgoing.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", self.graph.edge_slot(adj.edge).label())?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

/// Renders an edge as `{label,weight,{start,final}}`.
pub struct EdgeDisplay<'a, T> {
    graph: &'a Graph<T>,
    edge: &'a Edge<T>,
}

impl<'a, T> EdgeDisplay<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, edge: &'a Edge<T>) -> Self {
        Self { graph, edge }
    }
}

impl<T: fmt::Display> fmt::Display for EdgeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{{{},{}}}}}",
            self.edge.label(),
            self.edge.weight(),
            self.graph.vertex_slot(self.edge.start_vertex()).label(),
            self.graph.vertex_slot(self.edge.final_vertex()).label(),
        )
    }
}

/// Writes the vertex block followed by the edge block.
pub(crate) fn write_blocks<'a, T, V, E>(
    f: &mut fmt::Formatter<'_>,
    graph: &'a Graph<T>,
    vertices: V,
    edges: E,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    V: Iterator<Item = &'a Vertex<T>>,
    E: Iterator<Item = &'a Edge<T>>,
{
    f.write_str("{\n")?;
    for vertex in vertices {
        writeln!(f, "{INDENT}{}", VertexDisplay::new(graph, vertex))?;
    }
    f.write_str("}\n{\n")?;
    for edge in edges {
        writeln!(f, "{INDENT}{}", EdgeDisplay::new(graph, edge))?;
    }
    f.write_str("}")
}
