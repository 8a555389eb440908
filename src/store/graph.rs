//! The in-memory multigraph store.
//!
//! [`MultiGraph`] owns every index the crate maintains: the vertex and edge
//! indexes, the adjacency lists, and the incrementally maintained degree
//! counters. All mutation goes through it; the analytics and io layers only
//! read.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{Edge, EdgeId, Vertex, VertexId};

use super::error::{GraphError, GraphResult};
use super::id_gen::EdgeIdGenerator;

/// One outgoing adjacency entry: the far endpoint together with the edge
/// that produced it.
///
/// Keeping the edge id alongside the neighbor is what lets deletion resolve
/// the exact entry for one of several parallel edges instead of the first
/// value-equal neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    /// The vertex this entry points at.
    pub target: VertexId,
    /// The edge that created this entry.
    pub edge: EdgeId,
}

/// An in-memory directed multigraph with numbered edges.
///
/// Parallel edges between the same vertex pair are permitted and are told
/// apart by their store-assigned edge numbers, which ascend strictly from 0.
/// Degree counters are maintained incrementally on every mutation; no
/// operation derives them by rescanning.
///
/// # Consistency
///
/// Every mutating operation either applies completely or leaves the store
/// untouched: all precondition checks run before the first structure is
/// modified. Structures that would contradict each other (a stored edge with
/// no adjacency entry, a counter about to go negative) surface as
/// [`GraphError::InvariantViolation`] instead of being silently patched over.
///
/// # Concurrency
///
/// The store is single-writer by construction: mutation requires `&mut self`
/// and queries take `&self`, so concurrent reads are safe and concurrent
/// mutation is rejected at compile time. Wrap the store in a lock to share
/// it across threads.
///
/// # Example
///
/// ```
/// use gel_graph::store::MultiGraph;
/// use gel_graph::types::VertexId;
///
/// let mut graph = MultiGraph::new();
/// let e0 = graph.add_edge(VertexId::new(1), VertexId::new(2));
/// let e1 = graph.add_edge(VertexId::new(1), VertexId::new(2));
/// assert_ne!(e0, e1); // parallel edges are distinct
///
/// graph.delete_edge(e0).unwrap();
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MultiGraph {
    /// All vertices, keyed by vertex number.
    vertex_index: BTreeMap<VertexId, Vertex>,
    /// All edges, keyed by edge number.
    edge_index: BTreeMap<EdgeId, Edge>,
    /// Outgoing adjacency per source vertex, one entry per parallel edge.
    adjacency: HashMap<VertexId, Vec<AdjacencyEntry>>,
    /// Incoming edge count per vertex. No entry means no incoming edges.
    in_degree: HashMap<VertexId, usize>,
    /// Outgoing edge count per vertex. No entry means no outgoing edges.
    out_degree: HashMap<VertexId, usize>,
    /// Total incident edge count per vertex; self-loops count twice.
    degree: HashMap<VertexId, usize>,
    /// Edge number assignment.
    id_gen: EdgeIdGenerator,
}

impl MultiGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a vertex explicitly.
    ///
    /// Vertices are otherwise created implicitly by [`Self::add_edge`]; this
    /// is how isolated vertices enter the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the number is already
    /// present.
    pub fn add_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        if self.vertex_index.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }
        trace!(vertex = vertex.as_u64(), "add vertex");
        self.vertex_index.insert(vertex, Vertex::new(vertex));
        Ok(())
    }

    /// Insert a directed edge and return its assigned number.
    ///
    /// Endpoints missing from the vertex index are created implicitly.
    /// Self-loops are permitted and contribute one in- and one out-increment
    /// to the same vertex, so they count twice toward its total degree.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> EdgeId {
        let id = self.id_gen.next_edge_id();
        trace!(
            edge = id.as_u64(),
            source = source.as_u64(),
            target = target.as_u64(),
            "add edge"
        );

        self.edge_index.insert(id, Edge::new(id, source, target));
        self.vertex_index.entry(source).or_insert_with(|| Vertex::new(source));
        self.vertex_index.entry(target).or_insert_with(|| Vertex::new(target));

        self.adjacency.entry(source).or_default().push(AdjacencyEntry { target, edge: id });

        *self.out_degree.entry(source).or_insert(0) += 1;
        *self.in_degree.entry(target).or_insert(0) += 1;
        *self.degree.entry(source).or_insert(0) += 1;
        *self.degree.entry(target).or_insert(0) += 1;

        id
    }

    /// Delete an edge by number.
    ///
    /// The adjacency entry is resolved by edge identity, never by endpoint
    /// value, so deleting one of several parallel edges between the same
    /// pair cannot remove a sibling by mistake. All checks run before any
    /// structure is touched; a failed call leaves the store exactly as it
    /// was.
    ///
    /// The vertex index is not modified: endpoints stay in the graph even
    /// when their last incident edge is removed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] for an unknown edge number, and
    /// [`GraphError::InvariantViolation`] if the paired adjacency entry is
    /// missing or a degree counter would go negative — both of which signal
    /// store corruption, not caller error.
    pub fn delete_edge(&mut self, id: EdgeId) -> GraphResult<()> {
        let edge = *self.edge_index.get(&id).ok_or(GraphError::EdgeNotFound(id))?;

        let position = self
            .adjacency
            .get(&edge.source)
            .and_then(|entries| entries.iter().position(|entry| entry.edge == id))
            .ok_or_else(|| {
                GraphError::InvariantViolation(format!(
                    "edge {id} is indexed but has no adjacency entry under vertex {}",
                    edge.source
                ))
            })?;

        check_decrementable(&self.out_degree, edge.source, 1, "out-degree")?;
        check_decrementable(&self.in_degree, edge.target, 1, "in-degree")?;
        if edge.is_self_loop() {
            check_decrementable(&self.degree, edge.source, 2, "degree")?;
        } else {
            check_decrementable(&self.degree, edge.source, 1, "degree")?;
            check_decrementable(&self.degree, edge.target, 1, "degree")?;
        }

        trace!(edge = id.as_u64(), "delete edge");

        if let Some(entries) = self.adjacency.get_mut(&edge.source) {
            entries.remove(position);
            if entries.is_empty() {
                self.adjacency.remove(&edge.source);
            }
        }

        decrement(&mut self.out_degree, edge.source);
        decrement(&mut self.in_degree, edge.target);
        decrement(&mut self.degree, edge.source);
        decrement(&mut self.degree, edge.target);

        self.edge_index.remove(&id);
        Ok(())
    }

    /// Delete a vertex from the vertex index.
    ///
    /// Incident edges are **not** cascaded: any edges referencing the vertex
    /// remain in the edge index, along with their adjacency entries and
    /// degree counts, and will keep resurfacing the vertex number in scans.
    /// Callers that need a clean removal must delete the incident edges
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn delete_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        if self.vertex_index.remove(&vertex).is_none() {
            return Err(GraphError::VertexNotFound(vertex));
        }
        trace!(vertex = vertex.as_u64(), "delete vertex");
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get a vertex by number, or `None` if absent.
    #[must_use]
    pub fn get_vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertex_index.get(&vertex)
    }

    /// Get a vertex by number, or an error if absent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex is absent.
    pub fn find_vertex(&self, vertex: VertexId) -> GraphResult<&Vertex> {
        self.get_vertex(vertex).ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Check whether a vertex is present.
    #[must_use]
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertex_index.contains_key(&vertex)
    }

    /// Get an edge by number, or `None` if absent.
    #[must_use]
    pub fn get_edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&edge)
    }

    /// Get an edge by number, or an error if absent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge is absent.
    pub fn find_edge(&self, edge: EdgeId) -> GraphResult<&Edge> {
        self.get_edge(edge).ok_or(GraphError::EdgeNotFound(edge))
    }

    /// All vertices, keyed by number.
    ///
    /// The returned map is a read-only view; mutation goes through
    /// [`Self::add_vertex`] and [`Self::delete_vertex`].
    #[must_use]
    pub fn vertices(&self) -> &BTreeMap<VertexId, Vertex> {
        &self.vertex_index
    }

    /// All edges, keyed by number.
    ///
    /// The returned map is a read-only view; mutation goes through
    /// [`Self::add_edge`] and [`Self::delete_edge`].
    #[must_use]
    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edge_index
    }

    /// The outgoing adjacency lists, keyed by source vertex.
    ///
    /// Parallel edges contribute one entry each, in insertion order.
    /// Vertices without outgoing edges have no entry.
    #[must_use]
    pub fn adjacency(&self) -> &HashMap<VertexId, Vec<AdjacencyEntry>> {
        &self.adjacency
    }

    /// The outgoing adjacency entries of one vertex.
    ///
    /// Returns an empty slice for vertices without outgoing edges, known or
    /// not.
    #[must_use]
    pub fn out_entries(&self, vertex: VertexId) -> &[AdjacencyEntry] {
        self.adjacency.get(&vertex).map_or(&[], Vec::as_slice)
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_index.len()
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// Whether the graph holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_index.is_empty()
    }

    /// The most recently assigned edge number, if any edge was ever added.
    ///
    /// Deletion does not roll this back; numbers are never reused.
    #[must_use]
    pub fn last_edge_id(&self) -> Option<EdgeId> {
        let next = self.id_gen.current_counter();
        if next == 0 {
            None
        } else {
            Some(EdgeId::new(next - 1))
        }
    }

    // ========================================================================
    // Neighbor queries
    // ========================================================================

    /// All out-neighbors of a vertex, one per outgoing edge.
    ///
    /// Scans the full edge index (O(E)); a neighbor reached by several
    /// parallel edges appears once per edge.
    #[must_use]
    pub fn out_neighbors(&self, vertex: VertexId) -> Vec<Vertex> {
        self.edge_index
            .values()
            .filter(|edge| edge.source == vertex)
            .map(|edge| Vertex::new(edge.target))
            .collect()
    }

    /// All in-neighbors of a vertex, one per incoming edge.
    ///
    /// Scans the full edge index (O(E)); a neighbor with several parallel
    /// edges appears once per edge.
    #[must_use]
    pub fn in_neighbors(&self, vertex: VertexId) -> Vec<Vertex> {
        self.edge_index
            .values()
            .filter(|edge| edge.target == vertex)
            .map(|edge| Vertex::new(edge.source))
            .collect()
    }

    /// The recorded out-degree of a vertex, or `None` if it has no outgoing
    /// edges (isolated or unknown vertices included).
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> Option<usize> {
        self.out_degree.get(&vertex).copied()
    }

    /// The recorded in-degree of a vertex, or `None` if it has no incoming
    /// edges.
    #[must_use]
    pub fn in_degree(&self, vertex: VertexId) -> Option<usize> {
        self.in_degree.get(&vertex).copied()
    }

    /// The recorded total degree of a vertex, or `None` if it has no
    /// incident edges. Self-loops count twice.
    #[must_use]
    pub fn total_degree(&self, vertex: VertexId) -> Option<usize> {
        self.degree.get(&vertex).copied()
    }

    /// Number of outgoing edges of a vertex, from the maintained counter
    /// (O(1)).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex has no recorded
    /// out-degree, i.e. no outgoing edges. Distribution queries that want a
    /// zero default use [`Self::out_degree`] instead.
    pub fn num_out_neighbors(&self, vertex: VertexId) -> GraphResult<usize> {
        self.out_degree(vertex).ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Number of incoming edges of a vertex, from the maintained counter
    /// (O(1)).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex has no recorded
    /// in-degree.
    pub fn num_in_neighbors(&self, vertex: VertexId) -> GraphResult<usize> {
        self.in_degree(vertex).ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Total number of incident edges of a vertex, from the maintained
    /// counter (O(1)). Self-loops count twice.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the vertex has no recorded
    /// degree.
    pub fn num_neighbors(&self, vertex: VertexId) -> GraphResult<usize> {
        self.total_degree(vertex).ok_or(GraphError::VertexNotFound(vertex))
    }
}

/// Verify a counter can absorb a decrement of `by` before any mutation runs.
fn check_decrementable(
    counters: &HashMap<VertexId, usize>,
    vertex: VertexId,
    by: usize,
    name: &str,
) -> GraphResult<()> {
    match counters.get(&vertex) {
        Some(&count) if count >= by => Ok(()),
        Some(&count) => Err(GraphError::InvariantViolation(format!(
            "{name} counter for vertex {vertex} is {count}, cannot decrement by {by}"
        ))),
        None => Err(GraphError::InvariantViolation(format!(
            "{name} counter for vertex {vertex} is missing"
        ))),
    }
}

/// Decrement a counter, dropping the entry when it reaches zero so that "no
/// entry" always means "no incident edges in this direction".
fn decrement(counters: &mut HashMap<VertexId, usize>, vertex: VertexId) {
    if let Some(count) = counters.get_mut(&vertex) {
        *count -= 1;
        if *count == 0 {
            counters.remove(&vertex);
        }
    }
}
