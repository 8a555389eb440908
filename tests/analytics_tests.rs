//! Integration tests for degree distributions, SCC decomposition, and
//! out-component computation.

use std::collections::BTreeSet;

use gel_graph::analytics::{
    DegreeDistribution, OutComponent, SccConfig, StronglyConnectedComponents,
};
use gel_graph::store::MultiGraph;
use gel_graph::types::VertexId;

fn v(id: u64) -> VertexId {
    VertexId::new(id)
}

fn as_set(component: &[VertexId]) -> BTreeSet<u64> {
    component.iter().map(|id| id.as_u64()).collect()
}

// ============================================================================
// SCC decomposition
// ============================================================================

#[test]
fn three_cycle_is_one_component() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(1), v(2));
    graph.add_edge(v(2), v(0));

    let result = StronglyConnectedComponents::compute(&graph, &SccConfig::default());
    assert_eq!(result.num_components(), 1);
    assert_eq!(as_set(&result.components[0]), BTreeSet::from([0, 1, 2]));
}

#[test]
fn largest_only_keeps_the_bigger_of_two_cycles() {
    let mut graph = MultiGraph::new();
    // 2-cycle
    graph.add_edge(v(10), v(11));
    graph.add_edge(v(11), v(10));
    // 3-cycle, disjoint from the first
    graph.add_edge(v(20), v(21));
    graph.add_edge(v(21), v(22));
    graph.add_edge(v(22), v(20));

    let config = SccConfig::new().with_largest_only(true);
    let result = StronglyConnectedComponents::compute(&graph, &config);

    assert_eq!(result.num_components(), 1);
    assert_eq!(as_set(&result.components[0]), BTreeSet::from([20, 21, 22]));
}

#[test]
fn partition_covers_every_vertex_exactly_once() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(1), v(0));
    graph.add_edge(v(1), v(2));
    graph.add_edge(v(3), v(2));
    graph.add_vertex(v(9)).unwrap();

    let result = StronglyConnectedComponents::compute(&graph, &SccConfig::default());

    let mut seen: BTreeSet<u64> = BTreeSet::new();
    let mut total = 0usize;
    for component in result.iter() {
        total += component.len();
        seen.extend(component.iter().map(|id| id.as_u64()));
    }
    assert_eq!(total, graph.vertex_count());
    assert_eq!(seen, BTreeSet::from([0, 1, 2, 3, 9]));
}

#[test]
fn two_cycles_joined_one_way_stay_separate_components() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(1), v(0));
    graph.add_edge(v(1), v(2)); // bridge, one direction only
    graph.add_edge(v(2), v(3));
    graph.add_edge(v(3), v(2));

    let result = StronglyConnectedComponents::compute(&graph, &SccConfig::default());
    assert_eq!(result.num_components(), 2);

    let sets: Vec<BTreeSet<u64>> = result.iter().map(as_set).collect();
    assert!(sets.contains(&BTreeSet::from([0, 1])));
    assert!(sets.contains(&BTreeSet::from([2, 3])));
}

// ============================================================================
// Out-component
// ============================================================================

#[test]
fn out_component_of_a_two_cycle() {
    let mut graph = MultiGraph::new();
    let a = v(0);
    let b = v(1);
    let c = v(2);
    graph.add_edge(a, b);
    graph.add_edge(b, a);
    graph.add_edge(b, c);

    assert_eq!(OutComponent::compute(&graph, &[a, b]), vec![c]);
}

#[test]
fn out_component_follows_the_scc_decomposition() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(1), v(2));
    graph.add_edge(v(2), v(0));
    graph.add_edge(v(2), v(5));
    graph.add_edge(v(5), v(6));

    let config = SccConfig::new().with_largest_only(true);
    let result = StronglyConnectedComponents::compute(&graph, &config);
    let cycle = result.largest().unwrap();
    assert_eq!(as_set(cycle), BTreeSet::from([0, 1, 2]));

    assert_eq!(OutComponent::compute(&graph, cycle), vec![v(5), v(6)]);
}

// ============================================================================
// Degree distributions
// ============================================================================

#[test]
fn star_graph_out_distribution() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(0), v(2));
    graph.add_edge(v(0), v(3));

    let out = DegreeDistribution::out_degrees(&graph);
    assert_eq!(out.get(&3), Some(&1)); // the center
    assert_eq!(out.get(&0), Some(&3)); // the leaves
    assert_eq!(out.len(), 2);
}

#[test]
fn star_graph_in_distribution() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(0), v(2));
    graph.add_edge(v(0), v(3));

    let inc = DegreeDistribution::in_degrees(&graph);
    assert_eq!(inc.get(&1), Some(&3));
    assert_eq!(inc.get(&0), Some(&1));
}

#[test]
fn total_distribution_includes_isolated_vertices() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_vertex(v(5)).unwrap();

    let total = DegreeDistribution::total_degrees(&graph);
    assert_eq!(total.get(&1), Some(&2));
    assert_eq!(total.get(&0), Some(&1));
}

#[test]
fn joint_distribution_of_a_star() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(0), v(2));
    graph.add_edge(v(0), v(3));

    let joint = DegreeDistribution::joint(&graph);
    // center: out 3, in 0
    assert_eq!(joint.get(&3).and_then(|by_in| by_in.get(&0)), Some(&1));
    // leaves: out 0, in 1
    assert_eq!(joint.get(&0).and_then(|by_in| by_in.get(&1)), Some(&3));
}

#[test]
fn distributions_track_deletions() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    let e = graph.add_edge(v(0), v(2));
    graph.delete_edge(e).unwrap();

    let out = DegreeDistribution::out_degrees(&graph);
    assert_eq!(out.get(&1), Some(&1)); // vertex 0, back to out-degree 1
    assert_eq!(out.get(&0), Some(&2)); // vertices 1 and 2
}

#[test]
fn vertices_by_out_degree_matches_the_distribution() {
    let mut graph = MultiGraph::new();
    graph.add_edge(v(0), v(1));
    graph.add_edge(v(0), v(2));
    graph.add_edge(v(3), v(0));

    let heavy = DegreeDistribution::vertices_with_out_degree(&graph, 2);
    assert_eq!(heavy.len(), 1);
    assert_eq!(heavy[0].id, v(0));

    let out = DegreeDistribution::out_degrees(&graph);
    assert_eq!(out.get(&2).copied().unwrap_or(0), heavy.len());
}
