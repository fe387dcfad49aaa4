//! Algorithms over a borrowed [`Graph`].
//!
//! Every fallible entry point reports failure as [`GraphError::Route`], with the
//! specific cause kept as its `source` (see [`GraphError::root_kind`]).
//!
//! | Function | Answers |
//! |----------|---------|
//! | [`path`] / [`path_weight`] / [`has_path`] | cost of an exact walk given by vertex labels |
//! | [`shortest_weight`] / [`shortest_weight_with`] | minimum total weight between two vertices |
//! | [`paths_by_hops`] | every walk to a vertex within (or at exactly) a hop count |
//! | [`paths_within_range`] | every walk to a vertex cheaper than a weight bound |
//! | [`is_reachable`] / [`Bfs`] | reachability over at least one edge |
//!
//! ```
//! use waygraph::{algorithms, Graph};
//!
//! let mut graph = Graph::new();
//! for label in ["A", "B", "C"] {
//!     graph.add_vertex(label).unwrap();
//! }
//! graph.add_edge("AB", "A", "B", 5).unwrap();
//! graph.add_edge("BC", "B", "C", 4).unwrap();
//! graph.add_edge("AC", "A", "C", 12).unwrap();
//!
//! assert_eq!(algorithms::path_weight(&graph, &["A", "B", "C"]).unwrap(), 9);
//! assert_eq!(algorithms::shortest_weight(&graph, "A", "C").unwrap(), 9);
//! assert_eq!(algorithms::paths_by_hops(&graph, "A", "C", 2, false).unwrap().len(), 2);
//! ```

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use super::digraph::Graph;
use super::vertex::VertexId;
use super::Label;
use crate::error::{GraphError, Result};

mod enumerate;
mod route;
mod shortest;
mod traversal;

pub use enumerate::{paths_by_hops, paths_within_range};
pub use route::{has_path, path, path_weight};
pub use shortest::{shortest_weight, shortest_weight_with};
pub use traversal::{is_reachable, Bfs};

/// Looks up the start and final vertices of a query.
fn endpoints<T, Q>(graph: &Graph<T>, start: &Q, end: &Q) -> Result<(VertexId, VertexId)>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    let lookup = |label: &Q| {
        graph.vertex_id(label).ok_or_else(|| GraphError::UnknownVertex {
            label: label.to_string(),
        })
    };
    Ok((lookup(start)?, lookup(end)?))
}
