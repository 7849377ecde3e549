// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure for the PS2 games knowledge graph

use crate::types::{Edge, GraphStore, Node, NodeType, Relation};
use anyhow::{Context, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap};

/// The knowledge graph with petgraph backing
pub struct KnowledgeGraph {
    /// The underlying directed graph
    graph: DiGraph<String, Relation>,
    /// Map from node ID to node index
    node_indices: HashMap<String, NodeIndex>,
    /// The graph store (nodes, edges)
    pub store: GraphStore,
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeGraph {
    /// Create a new empty knowledge graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            store: GraphStore::default(),
        }
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) {
        if self.node_indices.contains_key(&node.id) {
            // Update existing node
            if let Some(existing) = self.store.nodes.iter_mut().find(|n| n.id == node.id) {
                *existing = node;
            }
        } else {
            // Add new node
            let idx = self.graph.add_node(node.id.clone());
            self.node_indices.insert(node.id.clone(), idx);
            self.store.nodes.push(node);
        }
    }

    /// Add an edge to the graph
    ///
    /// Fails if either endpoint is not present. Adding the same edge twice
    /// is a no-op.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let from_idx = self
            .node_indices
            .get(&edge.from)
            .ok_or_else(|| anyhow::anyhow!("Source node not found: {}", edge.from))?;
        let to_idx = self
            .node_indices
            .get(&edge.to)
            .ok_or_else(|| anyhow::anyhow!("Target node not found: {}", edge.to))?;

        if self.store.edges.iter().any(|e| e.id == edge.id) {
            return Ok(()); // Idempotent
        }

        self.graph.add_edge(*from_idx, *to_idx, edge.relation);
        self.store.edges.push(edge);

        Ok(())
    }

    /// Get a node by ID
    #[must_use]
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.store.nodes.iter().find(|n| n.id == id)
    }

    /// Get all nodes
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.store.nodes
    }

    /// Get all edges
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.store.edges
    }

    /// Get all nodes of a given type
    #[must_use]
    pub fn nodes_of_type(&self, node_type: NodeType) -> Vec<&Node> {
        self.store
            .nodes
            .iter()
            .filter(|n| n.node_type() == node_type)
            .collect()
    }

    /// Get all edges with a given relation
    #[must_use]
    pub fn edges_with_relation(&self, relation: Relation) -> Vec<&Edge> {
        self.store
            .edges
            .iter()
            .filter(|e| e.relation == relation)
            .collect()
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.nodes.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.store.edges.len()
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.nodes.is_empty()
    }

    /// Count nodes per type
    #[must_use]
    pub fn node_type_tally(&self) -> BTreeMap<NodeType, usize> {
        let mut tally = BTreeMap::new();
        for node in &self.store.nodes {
            *tally.entry(node.node_type()).or_insert(0) += 1;
        }
        tally
    }

    /// Count edges per relation
    #[must_use]
    pub fn relation_tally(&self) -> BTreeMap<Relation, usize> {
        let mut tally = BTreeMap::new();
        for edge in &self.store.edges {
            *tally.entry(edge.relation).or_insert(0) += 1;
        }
        tally
    }

    /// Borrow the petgraph backing for graph algorithms
    #[must_use]
    pub fn petgraph(&self) -> &DiGraph<String, Relation> {
        &self.graph
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph ps2games {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n\n");

        for node in &self.store.nodes {
            let label = format!("{}\\n{}", node.id, node.node_type().tag());
            dot.push_str(&format!("  \"{}\" [label=\"{}\"];\n", node.id, label));
        }

        dot.push('\n');

        for edge in &self.store.edges {
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                edge.from,
                edge.to,
                edge.relation.tag()
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.store).context("Failed to serialize graph to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeKind;

    fn make_game(name: &str) -> Node {
        Node::new(
            name,
            NodeKind::Game {
                rating: 9.0,
                year: 2001,
            },
        )
    }

    #[test]
    fn test_add_node() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("Final Fantasy X"));

        assert_eq!(graph.node_count(), 1);
        assert!(graph.get_node("Final Fantasy X").is_some());
    }

    #[test]
    fn test_add_node_twice_updates() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("Final Fantasy X"));
        graph.add_node(Node::new(
            "Final Fantasy X",
            NodeKind::Game {
                rating: 9.5,
                year: 2001,
            },
        ));

        assert_eq!(graph.node_count(), 1);
        let node = graph.get_node("Final Fantasy X").unwrap();
        assert_eq!(
            node.kind,
            NodeKind::Game {
                rating: 9.5,
                year: 2001
            }
        );
    }

    #[test]
    fn test_add_edge() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("God of War"));
        graph.add_node(make_game("God of War II"));

        let edge = Edge::new("God of War II", "God of War", Relation::IsSequelOf);
        graph.add_edge(edge).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges_with_relation(Relation::IsSequelOf).len(), 1);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("God of War"));

        let edge = Edge::new("God of War II", "God of War", Relation::IsSequelOf);
        assert!(graph.add_edge(edge).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("God of War"));
        graph.add_node(make_game("God of War II"));

        let edge = Edge::new("God of War II", "God of War", Relation::IsSequelOf);
        graph.add_edge(edge.clone()).unwrap();
        graph.add_edge(edge).unwrap();

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_with_different_relations() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("God of War"));
        graph.add_node(make_game("God of War II"));

        graph
            .add_edge(Edge::new("God of War II", "God of War", Relation::IsSequelOf))
            .unwrap();
        graph
            .add_edge(Edge::new(
                "God of War II",
                "God of War",
                Relation::PartOfSeries,
            ))
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_tallies() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("God of War"));
        graph.add_node(make_game("God of War II"));
        graph.add_node(Node::new(
            "Santa Monica Studio",
            NodeKind::Developer {
                country: "USA".into(),
            },
        ));
        graph
            .add_edge(Edge::new(
                "Santa Monica Studio",
                "God of War",
                Relation::Developed,
            ))
            .unwrap();

        let nodes = graph.node_type_tally();
        assert_eq!(nodes.get(&NodeType::Game), Some(&2));
        assert_eq!(nodes.get(&NodeType::Developer), Some(&1));
        assert_eq!(nodes.get(&NodeType::Genre), None);

        let relations = graph.relation_tally();
        assert_eq!(relations.get(&Relation::Developed), Some(&1));
    }

    #[test]
    fn test_to_dot() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(make_game("Tekken 3"));

        let dot = graph.to_dot();

        assert!(dot.contains("digraph ps2games"));
        assert!(dot.contains("Tekken 3"));
    }
}
