//! Read-only analytics over the graph store.
//!
//! Everything here consumes a [`MultiGraph`](crate::store::MultiGraph) by
//! shared reference and computes without mutating it:
//!
//! - [`DegreeDistribution`] - frequency tables over the degree counters
//! - [`StronglyConnectedComponents`] - Tarjan SCC decomposition
//! - [`OutComponent`] - vertices reachable from an SCC via condensation
//!
//! # Example
//!
//! ```
//! use gel_graph::analytics::{OutComponent, SccConfig, StronglyConnectedComponents};
//! use gel_graph::store::MultiGraph;
//! use gel_graph::types::VertexId;
//!
//! let mut graph = MultiGraph::new();
//! graph.add_edge(VertexId::new(0), VertexId::new(1));
//! graph.add_edge(VertexId::new(1), VertexId::new(0));
//! graph.add_edge(VertexId::new(1), VertexId::new(2));
//!
//! let sccs = StronglyConnectedComponents::compute(&graph, &SccConfig::default());
//! let cycle = sccs.largest().unwrap();
//! let downstream = OutComponent::compute(&graph, cycle);
//! assert_eq!(downstream, vec![VertexId::new(2)]);
//! ```

mod degree;
mod out_component;
mod scc;

pub use degree::DegreeDistribution;
pub use out_component::OutComponent;
pub use scc::{SccConfig, SccResult, StronglyConnectedComponents};
