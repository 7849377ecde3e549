// SPDX-License-Identifier: MIT OR Apache-2.0
//! Invariant tests for the PS2 games knowledge graph
//!
//! These tests verify critical invariants:
//! 1. Dataset fidelity - the literal tallies never drift
//! 2. Well-formedness - every edge endpoint exists in the node set
//! 3. Determinism - dataset and layout are identical across runs

use ps2graph::dataset;
use ps2graph::graph::KnowledgeGraph;
use ps2graph::layout::{self, LayoutConfig};
use ps2graph::types::{Edge, GraphStore, NodeType, Relation};
use std::collections::HashSet;

// =============================================================================
// Dataset Fidelity
// =============================================================================

#[test]
fn node_type_tally_matches_literal_counts() {
    let graph = dataset::build().unwrap();
    let tally = graph.node_type_tally();

    assert_eq!(tally.get(&NodeType::Game), Some(&6));
    assert_eq!(tally.get(&NodeType::Developer), Some(&5));
    assert_eq!(tally.get(&NodeType::Character), Some(&6));
    assert_eq!(tally.get(&NodeType::Series), Some(&4));
    assert_eq!(tally.get(&NodeType::Genre), Some(&3));
    assert_eq!(tally.values().sum::<usize>(), graph.node_count());
}

#[test]
fn relation_tally_matches_literal_counts() {
    let graph = dataset::build().unwrap();
    let tally = graph.relation_tally();

    assert_eq!(tally.get(&Relation::Developed), Some(&6));
    assert_eq!(tally.get(&Relation::HasProtagonist), Some(&6));
    assert_eq!(tally.get(&Relation::HasAntagonist), Some(&1));
    assert_eq!(tally.get(&Relation::PartOfSeries), Some(&4));
    assert_eq!(tally.get(&Relation::HasGenre), Some(&6));
    assert_eq!(tally.get(&Relation::IsSequelOf), Some(&1));
    assert_eq!(tally.values().sum::<usize>(), graph.edge_count());
}

#[test]
fn dataset_is_deterministic() {
    let first = dataset::build().unwrap();
    let second = dataset::build().unwrap();

    assert_eq!(first.nodes(), second.nodes());
    assert_eq!(first.edges(), second.edges());
}

// =============================================================================
// Well-Formedness
// =============================================================================

#[test]
fn every_edge_endpoint_exists() {
    let graph = dataset::build().unwrap();
    let node_ids: HashSet<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();

    for edge in graph.edges() {
        assert!(
            node_ids.contains(edge.from.as_str()),
            "dangling source: {}",
            edge.from
        );
        assert!(
            node_ids.contains(edge.to.as_str()),
            "dangling target: {}",
            edge.to
        );
    }
}

#[test]
fn petgraph_backing_mirrors_the_store() {
    let graph = dataset::build().unwrap();

    assert_eq!(graph.petgraph().node_count(), graph.node_count());
    assert_eq!(graph.petgraph().edge_count(), graph.edge_count());
}

#[test]
fn edge_ids_are_unique() {
    let graph = dataset::build().unwrap();
    let ids: HashSet<&str> = graph.edges().iter().map(|e| e.id.as_str()).collect();

    assert_eq!(ids.len(), graph.edge_count());
}

#[test]
fn edge_ids_are_stable() {
    let a = Edge::generate_id("God of War II", "God of War", Relation::IsSequelOf);
    let b = Edge::generate_id("God of War II", "God of War", Relation::IsSequelOf);
    let reversed = Edge::generate_id("God of War", "God of War II", Relation::IsSequelOf);

    assert_eq!(a, b);
    assert_ne!(a, reversed);
}

#[test]
fn dangling_edges_are_rejected() {
    let mut graph = KnowledgeGraph::new();
    let result = graph.add_edge(Edge::new("Nowhere", "Nothing", Relation::HasGenre));

    assert!(result.is_err());
    assert!(graph.is_empty());
}

// =============================================================================
// Layout Determinism
// =============================================================================

#[test]
fn layout_is_identical_across_runs() {
    let graph = dataset::build().unwrap();
    let config = LayoutConfig::default();

    let first = layout::compute(&graph, &config);
    let second = layout::compute(&graph, &config);

    assert_eq!(first.len(), graph.node_count());
    for (id, pos) in &first {
        let other = second.get(id).expect("node missing from second layout");
        assert_eq!(pos.x.to_bits(), other.x.to_bits(), "x drifted for {id}");
        assert_eq!(pos.y.to_bits(), other.y.to_bits(), "y drifted for {id}");
    }
}

// =============================================================================
// Export Fidelity
// =============================================================================

#[test]
fn dot_export_names_every_node_and_relation() {
    let graph = dataset::build().unwrap();
    let dot = graph.to_dot();

    for node in graph.nodes() {
        assert!(dot.contains(&node.id), "DOT missing node {}", node.id);
    }
    for relation in Relation::ALL {
        assert!(
            dot.contains(relation.tag()),
            "DOT missing relation {}",
            relation.tag()
        );
    }
}

#[test]
fn json_export_round_trips() {
    let graph = dataset::build().unwrap();
    let json = graph.to_json().unwrap();

    let store: GraphStore = serde_json::from_str(&json).unwrap();
    assert_eq!(store.nodes, graph.store.nodes);
    assert_eq!(store.edges, graph.store.edges);
}
