//! Directed, weighted graphs addressed by label.
//!
//! - [`Graph`]: arena-backed storage with label indexes
//! - [`Path`]: a walk through a graph, borrowed from it
//! - [`algorithms`]: route costs, shortest distances and bounded enumeration

use core::fmt;
use core::hash::Hash;

pub(crate) mod access;
pub mod algorithms;
mod digraph;
mod edge;
mod path;
mod render;
mod vertex;

pub use digraph::Graph;
pub use edge::{Edge, EdgeId};
pub use path::Path;
pub use render::{EdgeDisplay, VertexDisplay};
pub use vertex::{Adjacency, Vertex, VertexId};

/// Types usable as vertex and edge labels.
///
/// Implemented for every `Eq + Hash + Clone + Display` type. Labels whose
/// `Display` output is empty are rejected by [`Graph`].
pub trait Label: Eq + Hash + Clone + fmt::Display {}

impl<T: Eq + Hash + Clone + fmt::Display> Label for T {}
