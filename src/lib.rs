//! In-memory directed multigraph store with numbered edges.
//!
//! Parallel edges between the same vertex pair are first-class: every edge
//! gets a store-assigned number, and all indexes — vertex, edge, adjacency,
//! and the incrementally maintained degree counters — are keyed so that
//! sibling edges never collide. On top of the store sit degree-distribution
//! queries and two connectivity algorithms: Tarjan SCC decomposition and
//! out-component computation via condensation.
//!
//! # Modules
//!
//! - [`types`] - vertex/edge identifiers and records
//! - [`store`] - the [`MultiGraph`](store::MultiGraph) store and its errors
//! - [`analytics`] - degree distributions, SCC, out-component
//! - [`io`] - simple and dot edge-list formats
//!
//! # Example
//!
//! ```
//! use gel_graph::analytics::{SccConfig, StronglyConnectedComponents};
//! use gel_graph::store::MultiGraph;
//! use gel_graph::types::VertexId;
//!
//! let mut graph = MultiGraph::new();
//! graph.add_edge(VertexId::new(0), VertexId::new(1));
//! graph.add_edge(VertexId::new(1), VertexId::new(2));
//! graph.add_edge(VertexId::new(2), VertexId::new(0));
//!
//! let sccs = StronglyConnectedComponents::compute(&graph, &SccConfig::default());
//! assert_eq!(sccs.num_components(), 1);
//! ```

pub mod analytics;
pub mod io;
pub mod store;
pub mod types;
