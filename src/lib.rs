// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Ps2graph library - knowledge-graph visualizer for PS2-era games
//!
//! This crate builds a small, hardcoded knowledge graph of PS2-era games,
//! their developers, characters, series, and genres, computes a seeded
//! force-directed layout, and renders the result as static network and
//! statistics charts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod commands;
pub mod dataset;
pub mod graph;
pub mod layout;

/// Core data types of the knowledge graph
pub mod types {
    use plotters::style::RGBColor;
    use serde::{Deserialize, Serialize};
    use sha2::{Digest, Sha256};

    // =========================================================================
    // Node Types
    // =========================================================================

    /// Category tag of a node, determining display color and attribute schema
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    #[serde(rename_all = "lowercase")]
    pub enum NodeType {
        /// A video game title
        Game,
        /// A game development studio
        Developer,
        /// A playable or story character
        Character,
        /// A game franchise/series
        Series,
        /// A gameplay genre
        Genre,
    }

    impl NodeType {
        /// All node types in display order
        pub const ALL: [Self; 5] = [
            Self::Game,
            Self::Developer,
            Self::Character,
            Self::Series,
            Self::Genre,
        ];

        /// Get the lowercase tag for this node type
        #[must_use]
        pub fn tag(&self) -> &'static str {
            match self {
                Self::Game => "game",
                Self::Developer => "developer",
                Self::Character => "character",
                Self::Series => "series",
                Self::Genre => "genre",
            }
        }

        /// Get the plural legend label for this node type
        #[must_use]
        pub fn legend_label(&self) -> &'static str {
            match self {
                Self::Game => "Games",
                Self::Developer => "Developers",
                Self::Character => "Characters",
                Self::Series => "Series",
                Self::Genre => "Genres",
            }
        }

        /// Get the display color for nodes of this type
        #[must_use]
        pub fn color(&self) -> RGBColor {
            match self {
                Self::Game => RGBColor(255, 107, 107),
                Self::Developer => RGBColor(78, 205, 196),
                Self::Character => RGBColor(69, 183, 209),
                Self::Series => RGBColor(150, 206, 180),
                Self::Genre => RGBColor(255, 234, 167),
            }
        }
    }

    /// Narrative role of a character
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Role {
        /// Leading character
        Protagonist,
        /// Primary adversary
        Antagonist,
    }

    /// Type-specific attributes carried by a node
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "lowercase")]
    pub enum NodeKind {
        /// A game with review rating and release year
        Game {
            /// Aggregate review rating (0.0 to 10.0)
            rating: f64,
            /// Release year
            year: u16,
        },
        /// A developer with country of origin
        Developer {
            /// Country the studio is based in
            country: String,
        },
        /// A character with a narrative role
        Character {
            /// Protagonist or antagonist
            role: Role,
        },
        /// A game series (no attributes)
        Series,
        /// A genre (no attributes)
        Genre,
    }

    impl NodeKind {
        /// Get the category tag for this kind
        #[must_use]
        pub fn node_type(&self) -> NodeType {
            match self {
                Self::Game { .. } => NodeType::Game,
                Self::Developer { .. } => NodeType::Developer,
                Self::Character { .. } => NodeType::Character,
                Self::Series => NodeType::Series,
                Self::Genre => NodeType::Genre,
            }
        }
    }

    /// Node in the knowledge graph, identified by its display name
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Node {
        /// Unique display name, e.g. "Final Fantasy X"
        pub id: String,
        /// Type tag plus type-specific attributes
        #[serde(flatten)]
        pub kind: NodeKind,
    }

    impl Node {
        /// Create a node from a display name and kind
        #[must_use]
        pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
            Self {
                id: id.into(),
                kind,
            }
        }

        /// Get the category tag of this node
        #[must_use]
        pub fn node_type(&self) -> NodeType {
            self.kind.node_type()
        }
    }

    // =========================================================================
    // Relations
    // =========================================================================

    /// Category tag on a directed edge, determining display color and width
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    #[serde(rename_all = "camelCase")]
    pub enum Relation {
        /// Developer -> Game
        Developed,
        /// Game -> Character
        HasProtagonist,
        /// Game -> Character
        HasAntagonist,
        /// Game -> Series
        PartOfSeries,
        /// Game -> Genre
        HasGenre,
        /// Game -> Game (later title -> earlier title)
        IsSequelOf,
    }

    impl Relation {
        /// All relations in display order
        pub const ALL: [Self; 6] = [
            Self::Developed,
            Self::HasProtagonist,
            Self::HasAntagonist,
            Self::PartOfSeries,
            Self::HasGenre,
            Self::IsSequelOf,
        ];

        /// Get the camelCase tag for this relation
        #[must_use]
        pub fn tag(&self) -> &'static str {
            match self {
                Self::Developed => "developed",
                Self::HasProtagonist => "hasProtagonist",
                Self::HasAntagonist => "hasAntagonist",
                Self::PartOfSeries => "partOfSeries",
                Self::HasGenre => "hasGenre",
                Self::IsSequelOf => "isSequelOf",
            }
        }

        /// Get the human-readable legend label for this relation
        #[must_use]
        pub fn legend_label(&self) -> &'static str {
            match self {
                Self::Developed => "Developed by",
                Self::HasProtagonist => "Has Protagonist",
                Self::HasAntagonist => "Has Antagonist",
                Self::PartOfSeries => "Part of Series",
                Self::HasGenre => "Has Genre",
                Self::IsSequelOf => "Is Sequel Of",
            }
        }

        /// Get the display color for edges of this relation
        #[must_use]
        pub fn color(&self) -> RGBColor {
            match self {
                Self::Developed => RGBColor(102, 102, 102),
                Self::HasProtagonist => RGBColor(69, 183, 209),
                Self::HasAntagonist => RGBColor(255, 107, 107),
                Self::PartOfSeries => RGBColor(150, 206, 180),
                Self::HasGenre => RGBColor(255, 234, 167),
                Self::IsSequelOf => RGBColor(255, 149, 0),
            }
        }

        /// Get the stroke width for edges of this relation
        #[must_use]
        pub fn stroke_width(&self) -> u32 {
            match self {
                Self::IsSequelOf => 3,
                _ => 2,
            }
        }
    }

    // =========================================================================
    // Edge
    // =========================================================================

    /// Directed edge between two nodes
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Edge {
        /// Content-hash ID: edge:<hash of (from, to, relation)>
        pub id: String,
        /// Source node ID
        pub from: String,
        /// Target node ID
        pub to: String,
        /// Relationship type
        pub relation: Relation,
    }

    impl Edge {
        /// Create an edge with a deterministic content-hash ID
        #[must_use]
        pub fn new(from: impl Into<String>, to: impl Into<String>, relation: Relation) -> Self {
            let from = from.into();
            let to = to.into();
            let id = Self::generate_id(&from, &to, relation);
            Self {
                id,
                from,
                to,
                relation,
            }
        }

        /// Generate a deterministic ID for an edge
        #[must_use]
        pub fn generate_id(from: &str, to: &str, relation: Relation) -> String {
            let mut hasher = Sha256::new();
            hasher.update(from.as_bytes());
            hasher.update(b"\0");
            hasher.update(to.as_bytes());
            hasher.update(b"\0");
            hasher.update(relation.tag().as_bytes());
            let hash = hex::encode(hasher.finalize());
            format!("edge:{}", &hash[..8])
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Position in 2D space
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Position {
        /// X coordinate
        pub x: f64,
        /// Y coordinate
        pub y: f64,
    }

    // =========================================================================
    // Graph Store
    // =========================================================================

    /// The complete graph store
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct GraphStore {
        /// All nodes
        #[serde(default)]
        pub nodes: Vec<Node>,
        /// All edges
        #[serde(default)]
        pub edges: Vec<Edge>,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
