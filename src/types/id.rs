//! Unique identifiers for vertices and edges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a vertex in the graph.
///
/// Vertex numbers are chosen by the caller and are not required to be
/// contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a new `VertexId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an edge in the graph.
///
/// Edge numbers are assigned by the store in strictly increasing order
/// starting from 0, which is what distinguishes parallel edges between the
/// same vertex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Create a new `EdgeId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_roundtrip() {
        let id = VertexId::new(42);
        assert_eq!(id.as_u64(), 42);
    }

    #[test]
    fn edge_id_roundtrip() {
        let id = EdgeId::new(123);
        assert_eq!(id.as_u64(), 123);
    }

    #[test]
    fn ids_are_ordered() {
        assert!(VertexId::new(1) < VertexId::new(2));
        assert!(EdgeId::new(0) < EdgeId::new(1));
    }

    #[test]
    fn ids_display_as_raw_numbers() {
        assert_eq!(VertexId::new(7).to_string(), "7");
        assert_eq!(EdgeId::new(0).to_string(), "0");
    }
}
