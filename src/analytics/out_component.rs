//! Out-component computation via condensation.
//!
//! Given the vertex set of one strongly connected component, the
//! out-component is every vertex reachable from that set but outside it.
//! The component is collapsed into a single condensation node first, then a
//! reachability search from that node collects the answer.
//!
//! # Example
//!
//! ```
//! use gel_graph::analytics::OutComponent;
//! use gel_graph::store::MultiGraph;
//! use gel_graph::types::VertexId;
//!
//! let mut graph = MultiGraph::new();
//! graph.add_edge(VertexId::new(0), VertexId::new(1));
//! graph.add_edge(VertexId::new(1), VertexId::new(0));
//! graph.add_edge(VertexId::new(1), VertexId::new(2));
//!
//! let reachable = OutComponent::compute(&graph, &[VertexId::new(0), VertexId::new(1)]);
//! assert_eq!(reachable, vec![VertexId::new(2)]);
//! ```

use std::collections::{HashMap, HashSet};

use crate::store::MultiGraph;
use crate::types::VertexId;

/// A node of the condensation: either the collapsed component or an
/// ordinary vertex outside it.
///
/// Using a dedicated node type keeps the collapsed component's identity
/// outside the vertex-number space by construction, instead of reserving a
/// magic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CondensedNode {
    /// The collapsed component.
    Component,
    /// A vertex outside the component.
    Vertex(VertexId),
}

/// Out-component computation over a [`MultiGraph`].
pub struct OutComponent;

impl OutComponent {
    /// Compute the set of vertices reachable from `component` but not in
    /// it, returned sorted by vertex number.
    ///
    /// The component is collapsed into one condensation node that owns all
    /// of its members' outgoing edges (deduplicated, with edges back into
    /// the component dropped); every other vertex keeps its own adjacency,
    /// with edges into the component rewritten onto the collapsed node. A
    /// depth-first search from the collapsed node then collects everything
    /// it reaches. Cycles among the remaining vertices are handled by the
    /// visited set; the collapsed node itself never re-enters the search.
    ///
    /// Pure read: the graph is not modified.
    #[must_use]
    pub fn compute(graph: &MultiGraph, component: &[VertexId]) -> Vec<VertexId> {
        let members: HashSet<VertexId> = component.iter().copied().collect();

        // Condensation adjacency: the component's collective edge list,
        // plus each outside vertex's rewritten list.
        let mut component_edges: Vec<CondensedNode> = Vec::new();
        let mut outside: HashMap<VertexId, Vec<CondensedNode>> = HashMap::new();

        for (&source, entries) in graph.adjacency() {
            let rewritten: Vec<CondensedNode> = entries
                .iter()
                .map(|entry| {
                    if members.contains(&entry.target) {
                        CondensedNode::Component
                    } else {
                        CondensedNode::Vertex(entry.target)
                    }
                })
                .collect();

            if members.contains(&source) {
                component_edges.extend(rewritten);
            } else {
                outside.insert(source, rewritten);
            }
        }

        // The collective list picks up one entry per member edge; collapse
        // duplicates and drop edges that stayed inside the component.
        let mut seen: HashSet<CondensedNode> = HashSet::new();
        component_edges
            .retain(|&node| node != CondensedNode::Component && seen.insert(node));

        // Reachability from the collapsed node, explicit stack.
        let mut visited: HashSet<CondensedNode> = HashSet::new();
        visited.insert(CondensedNode::Component);
        let mut stack: Vec<CondensedNode> = vec![CondensedNode::Component];
        let mut reached: Vec<VertexId> = Vec::new();

        while let Some(node) = stack.pop() {
            let neighbors = match node {
                CondensedNode::Component => component_edges.as_slice(),
                CondensedNode::Vertex(vertex) => {
                    outside.get(&vertex).map_or(&[][..], Vec::as_slice)
                }
            };
            for &next in neighbors {
                if visited.insert(next) {
                    if let CondensedNode::Vertex(vertex) = next {
                        reached.push(vertex);
                    }
                    stack.push(next);
                }
            }
        }

        reached.sort_unstable();
        reached
    }
}
