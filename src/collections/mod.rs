//! General-purpose collections used by the graph algorithms.
//!
//! - `priority_queue`: binary min-heap priority queue

pub mod priority_queue;

pub use priority_queue::PriorityQueue;
