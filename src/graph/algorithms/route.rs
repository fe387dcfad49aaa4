//! Cost of an exact walk given as a list of vertex labels.

use core::borrow::Borrow;
use core::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::digraph::Graph;
use crate::graph::path::Path;
use crate::graph::vertex::VertexId;
use crate::graph::Label;

/// Resolves `labels` to a walk through `graph`.
///
/// Labels that do not name a vertex are dropped before the walk is checked,
/// so `["A", "X", "B"]` is treated as `["A", "B"]`.
///
/// # Errors
/// [`GraphError::Route`] wrapping:
/// - [`GraphError::EmptyPath`] if fewer than two labels are given, or fewer than two resolve.
/// - [`GraphError::DisconnectedPath`] if a resolved vertex has no edge to the next one.
pub fn path<'g, T, Q>(graph: &'g Graph<T>, labels: &[&Q]) -> Result<Path<'g, T>>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    tracing::debug!(labels = labels.len(), "resolve path");
    resolve(graph, labels).map_err(GraphError::into_route)
}

fn resolve<'g, T, Q>(graph: &'g Graph<T>, labels: &[&Q]) -> Result<Path<'g, T>>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    if labels.len() < 2 {
        return Err(GraphError::EmptyPath {
            required: 2,
            found: labels.len(),
        });
    }
    let ids: Vec<VertexId> = labels.iter().filter_map(|label| graph.vertex_id(*label)).collect();
    Path::from_vertices(graph, &ids)
}

/// Returns the total weight of the walk named by `labels`.
///
/// # Errors
/// Same as [`path`], plus [`GraphError::Route`] wrapping
/// [`GraphError::InvalidArgument`] if the total overflows an `i32`.
pub fn path_weight<T, Q>(graph: &Graph<T>, labels: &[&Q]) -> Result<i32>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let weight = path(graph, labels)?.checked_weight().map_err(GraphError::into_route)?;
    tracing::debug!(weight, "path weight");
    Ok(weight)
}

/// Returns `true` if `labels` name a connected walk.
pub fn has_path<T, Q>(graph: &Graph<T>, labels: &[&Q]) -> bool
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    path(graph, labels).is_ok()
}
