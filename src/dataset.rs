// SPDX-License-Identifier: MIT OR Apache-2.0
//! The hardcoded PS2 games dataset

use crate::graph::KnowledgeGraph;
use crate::types::{Edge, Node, NodeKind, Relation, Role};
use anyhow::Result;

/// Build the PS2 games knowledge graph from literal data
///
/// Deterministic: no runtime input, same graph on every call.
pub fn build() -> Result<KnowledgeGraph> {
    let mut graph = KnowledgeGraph::new();

    // Games
    let games: [(&str, f64, u16); 6] = [
        ("Final Fantasy X", 9.0, 2001),
        ("GTA: San Andreas", 9.6, 2004),
        ("Tekken 3", 9.5, 1998),
        ("Metal Gear Solid 2", 9.6, 2001),
        ("God of War", 9.0, 2005),
        ("God of War II", 9.2, 2007),
    ];
    for (name, rating, year) in games {
        graph.add_node(Node::new(name, NodeKind::Game { rating, year }));
    }

    // Developers
    let developers = [
        ("Square Enix", "Japan"),
        ("Rockstar Games", "USA"),
        ("Namco", "Japan"),
        ("Konami", "Japan"),
        ("Santa Monica Studio", "USA"),
    ];
    for (name, country) in developers {
        graph.add_node(Node::new(
            name,
            NodeKind::Developer {
                country: country.into(),
            },
        ));
    }

    // Characters
    let characters = [
        ("Cloud Strife", Role::Protagonist),
        ("Carl Johnson", Role::Protagonist),
        ("Jin Kazama", Role::Protagonist),
        ("Solid Snake", Role::Protagonist),
        ("Kratos", Role::Protagonist),
        ("Sephiroth", Role::Antagonist),
    ];
    for (name, role) in characters {
        graph.add_node(Node::new(name, NodeKind::Character { role }));
    }

    // Series
    for name in [
        "Final Fantasy Series",
        "GTA Series",
        "Tekken Series",
        "Metal Gear Series",
    ] {
        graph.add_node(Node::new(name, NodeKind::Series));
    }

    // Genres
    for name in ["RPG", "Action", "Fighting"] {
        graph.add_node(Node::new(name, NodeKind::Genre));
    }

    // Relationships
    let relationships = [
        // Developer-Game
        ("Square Enix", "Final Fantasy X", Relation::Developed),
        ("Rockstar Games", "GTA: San Andreas", Relation::Developed),
        ("Namco", "Tekken 3", Relation::Developed),
        ("Konami", "Metal Gear Solid 2", Relation::Developed),
        ("Santa Monica Studio", "God of War", Relation::Developed),
        ("Santa Monica Studio", "God of War II", Relation::Developed),
        // Game-Character
        ("Final Fantasy X", "Cloud Strife", Relation::HasProtagonist),
        ("Final Fantasy X", "Sephiroth", Relation::HasAntagonist),
        ("GTA: San Andreas", "Carl Johnson", Relation::HasProtagonist),
        ("Tekken 3", "Jin Kazama", Relation::HasProtagonist),
        ("Metal Gear Solid 2", "Solid Snake", Relation::HasProtagonist),
        ("God of War", "Kratos", Relation::HasProtagonist),
        ("God of War II", "Kratos", Relation::HasProtagonist),
        // Game-Series
        ("Final Fantasy X", "Final Fantasy Series", Relation::PartOfSeries),
        ("GTA: San Andreas", "GTA Series", Relation::PartOfSeries),
        ("Tekken 3", "Tekken Series", Relation::PartOfSeries),
        ("Metal Gear Solid 2", "Metal Gear Series", Relation::PartOfSeries),
        // Game-Genre
        ("Final Fantasy X", "RPG", Relation::HasGenre),
        ("GTA: San Andreas", "Action", Relation::HasGenre),
        ("Tekken 3", "Fighting", Relation::HasGenre),
        ("Metal Gear Solid 2", "Action", Relation::HasGenre),
        ("God of War", "Action", Relation::HasGenre),
        ("God of War II", "Action", Relation::HasGenre),
        // Sequel
        ("God of War II", "God of War", Relation::IsSequelOf),
    ];
    for (from, to, relation) in relationships {
        graph.add_edge(Edge::new(from, to, relation))?;
    }

    Ok(graph)
}
