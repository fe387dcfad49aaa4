//! Single-pair minimum total weight.
//!
//! Both strategies seed every vertex with the configured sentinel and the start
//! vertex with `0`. An edge that leads back into the start vertex replaces that
//! `0`, so asking for `start == final` yields the cheapest cycle through it. The
//! answer is accepted only when it lies strictly between `0` and the sentinel.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use super::endpoints;
use crate::collections::PriorityQueue;
use crate::config::{SearchConfig, ShortestPathStrategy};
use crate::error::{GraphError, Result};
use crate::graph::access::scratch::{DistanceTable, WorkingSet};
use crate::graph::digraph::Graph;
use crate::graph::vertex::VertexId;
use crate::graph::Label;

/// Returns the minimum total weight of any walk from `start` to `end`, using the
/// default [`SearchConfig`].
///
/// # Errors
/// [`GraphError::Route`] wrapping:
/// - [`GraphError::InvalidArgument`] if the graph has no vertices.
/// - [`GraphError::UnknownVertex`] if either label is missing.
/// - [`GraphError::Unreachable`] if no walk of at least one edge reaches `end`
///   with a total below the sentinel.
pub fn shortest_weight<T, Q>(graph: &Graph<T>, start: &Q, end: &Q) -> Result<i32>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    shortest_weight_with(graph, start, end, &SearchConfig::default())
}

/// Like [`shortest_weight`], with an explicit sentinel and strategy.
///
/// # Errors
/// As [`shortest_weight`], plus [`GraphError::InvalidArgument`] (wrapped) for an
/// invalid `config`.
pub fn shortest_weight_with<T, Q>(graph: &Graph<T>, start: &Q, end: &Q, config: &SearchConfig) -> Result<i32>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    search(graph, start, end, config).map_err(GraphError::into_route)
}

fn search<T, Q>(graph: &Graph<T>, start: &Q, end: &Q, config: &SearchConfig) -> Result<i32>
where
    T: Label + Borrow<Q>,
    Q: Hash + Eq + fmt::Display + ?Sized,
{
    config.validate()?;
    if graph.is_empty() {
        return Err(GraphError::invalid_argument("graph has no vertices"));
    }
    let (from, to) = endpoints(graph, start, end)?;
    tracing::debug!(start = %start, end = %end, strategy = ?config.strategy, "shortest weight");

    let sentinel = config.sentinel_weight;
    let weight = match config.strategy {
        ShortestPathStrategy::LinearScan => linear_scan(graph, from, to, sentinel),
        ShortestPathStrategy::BinaryHeap => binary_heap(graph, from, to, sentinel),
    };

    if weight <= 0 || weight >= sentinel {
        tracing::warn!(start = %start, end = %end, weight, sentinel, "no settled route");
        return Err(GraphError::Unreachable {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    tracing::debug!(start = %start, end = %end, weight, "shortest weight resolved");
    Ok(weight)
}

/// Settles vertices by scanning the whole working set for its minimum.
fn linear_scan<T>(graph: &Graph<T>, start: VertexId, end: VertexId, sentinel: i32) -> i32 {
    let mut dist = DistanceTable::new(graph.vertex_count(), sentinel);
    dist.set(start, 0);
    let mut pending = WorkingSet::full(dist.len());

    while let Some(min) = pending.take_min(&dist) {
        let base = dist.get(min);
        for adj in graph.vertex_slot(min).outgoing() {
            let candidate = graph.edge_slot(adj.edge).weight().saturating_add(base);
            let current = dist.get(adj.target);
            if current == 0 || current > candidate {
                tracing::trace!(from = min.index(), to = adj.target.index(), candidate, "relax");
                dist.set(adj.target, candidate);
            }
        }
    }

    dist.get(end)
}

/// Settles vertices in heap order, skipping entries that were superseded.
fn binary_heap<T>(graph: &Graph<T>, start: VertexId, end: VertexId, sentinel: i32) -> i32 {
    let mut dist = DistanceTable::new(graph.vertex_count(), sentinel);
    let mut settled = vec![false; dist.len()];
    // Cheapest walk found back into `start`.
    let mut cycle = sentinel;

    dist.set(start, 0);
    let mut queue = PriorityQueue::with_capacity(dist.len());
    queue.enqueue((0, start));

    while let Ok((base, node)) = queue.dequeue() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        for adj in graph.vertex_slot(node).outgoing() {
            let candidate = graph.edge_slot(adj.edge).weight().saturating_add(base);
            if adj.target == start {
                cycle = cycle.min(candidate);
                continue;
            }
            if candidate < dist.get(adj.target) {
                tracing::trace!(from = node.index(), to = adj.target.index(), candidate, "relax");
                dist.set(adj.target, candidate);
                queue.enqueue((candidate, adj.target));
            }
        }
    }

    if start == end {
        cycle
    } else {
        dist.get(end)
    }
}
