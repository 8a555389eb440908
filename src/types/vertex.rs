//! Vertex types for the graph.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// A vertex in the graph.
///
/// Vertices carry nothing beyond their numeric identity. Two `Vertex`
/// values are equal exactly when their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex.
    pub id: VertexId,
}

impl Vertex {
    /// Create a new vertex with the given id.
    #[must_use]
    pub const fn new(id: VertexId) -> Self {
        Self { id }
    }
}

impl From<VertexId> for Vertex {
    fn from(id: VertexId) -> Self {
        Self::new(id)
    }
}
