//! Internal building blocks shared by the graph algorithms.
//!
//! This module is `pub(crate)`: algorithms keep their per-call state here so the
//! graph itself stays read-only while they run.

pub(crate) mod scratch;
