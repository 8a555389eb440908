//! Degree distribution queries.
//!
//! Frequency tables over the store's maintained degree counters: how many
//! vertices have a given in-, out-, or total degree, plus the joint
//! (out, in) bucketing and reverse lookups from a degree value to the
//! vertices carrying it.
//!
//! Every query here iterates the full vertex index and treats an absent
//! counter as degree 0, so isolated vertices are included uniformly across
//! all of them. All queries are O(V) reads; none mutate the store.
//!
//! # Example
//!
//! ```
//! use gel_graph::analytics::DegreeDistribution;
//! use gel_graph::store::MultiGraph;
//! use gel_graph::types::VertexId;
//!
//! let mut graph = MultiGraph::new();
//! graph.add_edge(VertexId::new(0), VertexId::new(1));
//! graph.add_edge(VertexId::new(0), VertexId::new(2));
//!
//! let out = DegreeDistribution::out_degrees(&graph);
//! assert_eq!(out.get(&2), Some(&1)); // vertex 0
//! assert_eq!(out.get(&0), Some(&2)); // vertices 1 and 2
//! ```

use std::collections::BTreeMap;

use crate::store::MultiGraph;
use crate::types::{Vertex, VertexId};

/// Degree distribution queries over a [`MultiGraph`].
pub struct DegreeDistribution;

impl DegreeDistribution {
    /// Frequency table of in-degrees: degree value to the number of
    /// vertices with that in-degree. Vertices without incoming edges count
    /// under degree 0.
    #[must_use]
    pub fn in_degrees(graph: &MultiGraph) -> BTreeMap<usize, usize> {
        Self::frequency_table(graph, |graph, vertex| graph.in_degree(vertex))
    }

    /// Frequency table of out-degrees. Vertices without outgoing edges
    /// count under degree 0.
    #[must_use]
    pub fn out_degrees(graph: &MultiGraph) -> BTreeMap<usize, usize> {
        Self::frequency_table(graph, |graph, vertex| graph.out_degree(vertex))
    }

    /// Frequency table of total degrees. Self-loops count twice; isolated
    /// vertices count under degree 0, the same convention as the in- and
    /// out-degree tables.
    #[must_use]
    pub fn total_degrees(graph: &MultiGraph) -> BTreeMap<usize, usize> {
        Self::frequency_table(graph, |graph, vertex| graph.total_degree(vertex))
    }

    /// Joint distribution bucketing every vertex by its (out-degree,
    /// in-degree) pair: out-degree to in-degree to vertex count.
    #[must_use]
    pub fn joint(graph: &MultiGraph) -> BTreeMap<usize, BTreeMap<usize, usize>> {
        let mut joint: BTreeMap<usize, BTreeMap<usize, usize>> = BTreeMap::new();
        for &vertex in graph.vertices().keys() {
            let out = graph.out_degree(vertex).unwrap_or(0);
            let inc = graph.in_degree(vertex).unwrap_or(0);
            *joint.entry(out).or_default().entry(inc).or_insert(0) += 1;
        }
        joint
    }

    /// Every vertex whose in-degree equals `degree`, in vertex-number
    /// order. Querying degree 0 returns the vertices without incoming
    /// edges.
    #[must_use]
    pub fn vertices_with_in_degree(graph: &MultiGraph, degree: usize) -> Vec<Vertex> {
        Self::vertices_by(graph, degree, |graph, vertex| graph.in_degree(vertex))
    }

    /// Every vertex whose out-degree equals `degree`, in vertex-number
    /// order.
    #[must_use]
    pub fn vertices_with_out_degree(graph: &MultiGraph, degree: usize) -> Vec<Vertex> {
        Self::vertices_by(graph, degree, |graph, vertex| graph.out_degree(vertex))
    }

    fn frequency_table(
        graph: &MultiGraph,
        pick: impl Fn(&MultiGraph, VertexId) -> Option<usize>,
    ) -> BTreeMap<usize, usize> {
        let mut table: BTreeMap<usize, usize> = BTreeMap::new();
        for &vertex in graph.vertices().keys() {
            let degree = pick(graph, vertex).unwrap_or(0);
            *table.entry(degree).or_insert(0) += 1;
        }
        table
    }

    fn vertices_by(
        graph: &MultiGraph,
        degree: usize,
        pick: impl Fn(&MultiGraph, VertexId) -> Option<usize>,
    ) -> Vec<Vertex> {
        graph
            .vertices()
            .values()
            .filter(|vertex| pick(graph, vertex.id).unwrap_or(0) == degree)
            .copied()
            .collect()
    }
}
