//! Error types for graph store operations.

use thiserror::Error;

use crate::types::{EdgeId, VertexId};

/// Errors that can occur in graph store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with the given number already exists.
    #[error("vertex already exists: {0}")]
    DuplicateVertex(VertexId),

    /// A vertex was not found in the relevant index or counter.
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// An edge was not found.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// An internal structure disagreed with the store's invariants, e.g. a
    /// degree counter that would go negative or an adjacency entry missing
    /// for a stored edge. This is a logic fault, never a caller mistake.
    #[error("graph invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;
