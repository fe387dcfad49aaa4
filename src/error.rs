//! Error types for graph construction, path resolution and the algorithm layer.
//!
//! Container operations fail with a specific variant. The algorithm entry points
//! in [`crate::graph::algorithms`] wrap whatever went wrong in
//! [`GraphError::Route`], keeping the original error as the `source` so the
//! specific kind stays available for diagnostics through [`GraphError::root_kind`].

use thiserror::Error;

/// Flat classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input (empty label, non-positive weight or bound).
    InvalidArgument,
    /// A vertex with the same label already exists.
    DuplicateVertex,
    /// An edge references a vertex label that is not in the graph.
    UnknownVertex,
    /// The start vertex already has an outgoing edge to the same final vertex.
    DuplicateEdge,
    /// An edge with the same label already exists.
    DuplicateEdgeLabel,
    /// A vertex or edge sequence does not form a connected walk.
    DisconnectedPath,
    /// Too few vertices or edges to build a path.
    EmptyPath,
    /// `dequeue`/`peek` on an empty priority queue.
    EmptyQueue,
    /// The shortest-distance postcondition did not hold.
    Unreachable,
    /// A configuration document could not be parsed.
    Config,
    /// Umbrella error raised by the algorithm layer.
    Route,
}

/// Errors that can occur while building or querying a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed or out-of-range input.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
    },

    /// `add_vertex` with a label that is already taken.
    #[error("vertex already exists: {label}")]
    DuplicateVertex {
        /// The rejected label.
        label: String,
    },

    /// An edge endpoint label does not resolve to a vertex.
    #[error("unknown vertex: {label}")]
    UnknownVertex {
        /// The label that was looked up.
        label: String,
    },

    /// The start vertex already links to the final vertex.
    #[error("edge already exists between {start} and {end}")]
    DuplicateEdge {
        /// Label of the start vertex.
        start: String,
        /// Label of the final vertex.
        end: String,
    },

    /// `add_edge` with an edge label that is already taken.
    #[error("edge label already exists: {label}")]
    DuplicateEdgeLabel {
        /// The rejected label.
        label: String,
    },

    /// Two consecutive path elements are not connected by an edge.
    #[error("no edge from {from} to {to}")]
    DisconnectedPath {
        /// Label of the vertex the walk stops at.
        from: String,
        /// Label of the vertex it cannot reach.
        to: String,
    },

    /// Too few elements to build a path.
    #[error("path needs at least {required} elements, found {found}")]
    EmptyPath {
        /// Minimum number of elements.
        required: usize,
        /// Number of elements given.
        found: usize,
    },

    /// `dequeue` or `peek` on an empty queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The shortest distance to the final vertex was never settled.
    #[error("no route from {start} to {end}")]
    Unreachable {
        /// Label of the start vertex.
        start: String,
        /// Label of the final vertex.
        end: String,
    },

    /// A configuration document failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Umbrella error of the algorithm layer; `source` holds the cause.
    #[error("route does not exist")]
    Route {
        /// The failure that caused the route to be rejected.
        #[source]
        source: Box<GraphError>,
    },
}

impl GraphError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        GraphError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Wraps `self` in [`GraphError::Route`]. Already-wrapped errors are returned as is.
    pub fn into_route(self) -> Self {
        match self {
            GraphError::Route { .. } => self,
            other => GraphError::Route {
                source: Box::new(other),
            },
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            GraphError::DuplicateVertex { .. } => ErrorKind::DuplicateVertex,
            GraphError::UnknownVertex { .. } => ErrorKind::UnknownVertex,
            GraphError::DuplicateEdge { .. } => ErrorKind::DuplicateEdge,
            GraphError::DuplicateEdgeLabel { .. } => ErrorKind::DuplicateEdgeLabel,
            GraphError::DisconnectedPath { .. } => ErrorKind::DisconnectedPath,
            GraphError::EmptyPath { .. } => ErrorKind::EmptyPath,
            GraphError::EmptyQueue => ErrorKind::EmptyQueue,
            GraphError::Unreachable { .. } => ErrorKind::Unreachable,
            GraphError::Config(_) => ErrorKind::Config,
            GraphError::Route { .. } => ErrorKind::Route,
        }
    }

    /// Returns the kind of the innermost error, looking through [`GraphError::Route`].
    pub fn root_kind(&self) -> ErrorKind {
        match self {
            GraphError::Route { source } => source.root_kind(),
            other => other.kind(),
        }
    }

    /// Returns `true` if this is the algorithm layer's umbrella error.
    pub fn is_route(&self) -> bool {
        matches!(self, GraphError::Route { .. })
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
