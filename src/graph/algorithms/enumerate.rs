//! Bounded depth-first enumeration of walks between two vertices.
//!
//! Vertices may repeat along a walk; termination comes from the bound alone.
//! Results are returned in depth-first order, following each vertex's outgoing
//! edges in insertion order.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use super::endpoints;
use crate::error::{GraphError, Result};
use crate::graph::access::scratch::WalkStack;
use crate::graph::digraph::Graph;
use crate::graph::path::Path;
use crate::graph::vertex::VertexId;
use crate::graph::Label;

/// One vertex on the depth-first stack and the next outgoing edge to try.
struct Frame {
    vertex: VertexId,
    next: usize,
    weight: i32,
}

impl Frame {
    fn new(vertex: VertexId, weight: i32) -> Self {
        Self {
            vertex,
            next: 0,
            weight,
        }
    }
}

/// Enumerates walks from `start` to `end` bounded by their number of edges.
///
/// With `enforce_exact == false` a walk ends the first time it reaches `end`,
/// so every result has at most `max_edges` edges and touches `end` only at its
/// last vertex. With `enforce_exact == true` walks keep going through `end` and
/// only those with exactly `max_edges` edges are returned.
///
/// Clears the visited flags first and marks every vertex the search enters.
/// An empty `Vec` means no walk matched.
///
/// # Errors
/// [`GraphError::Route`] wrapping [`GraphError::InvalidArgument`] for
/// `max_edges == 0`, or [`GraphError::UnknownVertex`] for a missing label.
pub fn paths_by_hops<'g, T, Q>(
    graph: &'g Graph<T>,
    start: &Q,
    end: &Q,
    max_edges: usize,
    enforce_exact: bool,
) -> Result<Vec<Path<'g, T>>>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    by_hops(graph, start, end, max_edges, enforce_exact).map_err(GraphError::into_route)
}

fn by_hops<'g, T, Q>(
    graph: &'g Graph<T>,
    start: &Q,
    end: &Q,
    max_edges: usize,
    enforce_exact: bool,
) -> Result<Vec<Path<'g, T>>>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    if max_edges == 0 {
        return Err(GraphError::invalid_argument("maximum number of edges must be positive"));
    }
    let (from, to) = endpoints(graph, start, end)?;
    tracing::debug!(start = %start, end = %end, max_edges, enforce_exact, "enumerate by hops");

    graph.reset();
    graph.vertex_slot(from).mark_visited();

    let mut found = Vec::new();
    let mut walk = WalkStack::new(from);
    let mut frames = vec![Frame::new(from, 0)];

    while let Some(frame) = frames.last_mut() {
        let Some(&adj) = graph.vertex_slot(frame.vertex).outgoing().get(frame.next) else {
            frames.pop();
            walk.pop();
            continue;
        };
        frame.next += 1;

        walk.push(adj.edge, adj.target);
        graph.vertex_slot(adj.target).mark_visited();

        // The stack holds the start vertex too, so this fires once the walk
        // has `max_edges` edges.
        let exhausted = walk.depth() > max_edges;
        let arrived = adj.target == to;
        if exhausted || (arrived && !enforce_exact) {
            if arrived {
                tracing::trace!(hops = walk.depth() - 1, "path recorded");
                found.push(walk.snapshot(graph));
            }
            walk.pop();
            continue;
        }
        frames.push(Frame::new(adj.target, 0));
    }

    tracing::debug!(paths = found.len(), "enumerate by hops finished");
    Ok(found)
}

/// Enumerates walks from `start` to `end` whose total weight stays below
/// `max_weight`.
///
/// A walk that reaches `end` is recorded and then extended further, so one
/// result can be a prefix of another. `start == end` yields the cycles through
/// `start`, never the empty walk.
///
/// Clears the visited flags first and marks every vertex the search enters.
///
/// # Errors
/// [`GraphError::Route`] wrapping [`GraphError::InvalidArgument`] for a
/// non-positive `max_weight`, or [`GraphError::UnknownVertex`] for a missing label.
pub fn paths_within_range<'g, T, Q>(
    graph: &'g Graph<T>,
    start: &Q,
    end: &Q,
    max_weight: i32,
) -> Result<Vec<Path<'g, T>>>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    within_range(graph, start, end, max_weight).map_err(GraphError::into_route)
}

fn within_range<'g, T, Q>(graph: &'g Graph<T>, start: &Q, end: &Q, max_weight: i32) -> Result<Vec<Path<'g, T>>>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    if max_weight <= 0 {
        return Err(GraphError::invalid_argument(format!(
            "maximum weight must be positive, got {max_weight}"
        )));
    }
    let (from, to) = endpoints(graph, start, end)?;
    tracing::debug!(start = %start, end = %end, max_weight, "enumerate within range");

    graph.reset();
    graph.vertex_slot(from).mark_visited();

    let mut found = Vec::new();
    let mut walk = WalkStack::new(from);
    let mut frames = vec![Frame::new(from, 0)];

    while let Some(frame) = frames.last_mut() {
        let Some(&adj) = graph.vertex_slot(frame.vertex).outgoing().get(frame.next) else {
            frames.pop();
            walk.pop();
            continue;
        };
        frame.next += 1;

        let weight = frame.weight.saturating_add(graph.edge_slot(adj.edge).weight());
        if weight >= max_weight {
            continue;
        }

        walk.push(adj.edge, adj.target);
        graph.vertex_slot(adj.target).mark_visited();
        if adj.target == to {
            tracing::trace!(weight, "path recorded");
            found.push(walk.snapshot(graph));
        }
        frames.push(Frame::new(adj.target, weight));
    }

    tracing::debug!(paths = found.len(), "enumerate within range finished");
    Ok(found)
}
