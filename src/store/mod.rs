//! Multigraph storage and mutation.
//!
//! This module owns the graph's state and every operation that changes it:
//!
//! - [`MultiGraph`] - vertex/edge indexes, adjacency lists, degree counters
//! - [`EdgeIdGenerator`] - monotonic edge number assignment
//! - [`GraphError`] / [`GraphResult`] - the store's error taxonomy
//!
//! # Example
//!
//! ```
//! use gel_graph::store::MultiGraph;
//! use gel_graph::types::VertexId;
//!
//! let mut graph = MultiGraph::new();
//! let edge = graph.add_edge(VertexId::new(0), VertexId::new(1));
//! assert_eq!(graph.num_out_neighbors(VertexId::new(0))?, 1);
//! graph.delete_edge(edge)?;
//! assert_eq!(graph.edge_count(), 0);
//! # Ok::<(), gel_graph::store::GraphError>(())
//! ```

mod error;
mod graph;
mod id_gen;


pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyEntry, MultiGraph};
pub use id_gen::EdgeIdGenerator;
