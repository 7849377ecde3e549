// SPDX-License-Identifier: MIT OR Apache-2.0
//! Render command - draws the network diagram of the knowledge graph

use crate::dataset;
use crate::graph::KnowledgeGraph;
use crate::layout::{self, LayoutConfig};
use crate::types::{NodeType, Position, Relation};
use anyhow::{anyhow, Context, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Pixel dimensions of the network diagram
const NETWORK_SIZE: (u32, u32) = (1600, 1200);

/// Node disc radius in pixels
const NODE_RADIUS: i32 = 22;

/// Blank border around the drawing area, in pixels
const MARGIN: f64 = 130.0;

/// Run the render command: network diagram to PNG and SVG
pub fn run(out_dir: &Path, seed: u64) -> Result<()> {
    let graph = dataset::build()?;
    let positions = layout::compute(
        &graph,
        &LayoutConfig {
            seed,
            ..LayoutConfig::default()
        },
    );

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory {}", out_dir.display()))?;

    let png_path = out_dir.join("ps2_games_network.png");
    let svg_path = out_dir.join("ps2_games_network.svg");

    info!("Rendering network diagram");

    {
        let root = BitMapBackend::new(&png_path, NETWORK_SIZE).into_drawing_area();
        draw_network(&root, &graph, &positions)
            .map_err(|e| anyhow!("Failed to draw network diagram: {e}"))?;
        root.present()
            .map_err(|e| anyhow!("Failed to write {}: {e}", png_path.display()))?;
    }
    {
        let root = SVGBackend::new(&svg_path, NETWORK_SIZE).into_drawing_area();
        draw_network(&root, &graph, &positions)
            .map_err(|e| anyhow!("Failed to draw network diagram: {e}"))?;
        root.present()
            .map_err(|e| anyhow!("Failed to write {}: {e}", svg_path.display()))?;
    }

    println!(
        "Network visualization saved as '{}' and '{}'",
        png_path.display(),
        svg_path.display()
    );

    Ok(())
}

/// Map a normalized layout position to pixel coordinates
fn to_pixels(pos: Position) -> (i32, i32) {
    let (width, height) = NETWORK_SIZE;
    let x = MARGIN + pos.x * (f64::from(width) - 2.0 * MARGIN);
    // Leave extra headroom for the title block
    let y = MARGIN + 40.0 + pos.y * (f64::from(height) - 2.0 * MARGIN - 40.0);
    (x as i32, y as i32)
}

/// Draw the full network diagram onto a drawing area
fn draw_network<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    graph: &KnowledgeGraph,
    positions: &HashMap<String, Position>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (width, _) = NETWORK_SIZE;

    // Title block
    let title_style = TextStyle::from(("sans-serif", 34).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        "PS2 Games Knowledge Graph",
        (width as i32 / 2, 18),
        title_style,
    ))?;
    let subtitle_style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&RGBColor(80, 80, 80))
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        "Games, Developers, Characters, and Relationships",
        (width as i32 / 2, 58),
        subtitle_style,
    ))?;

    // Edges first so nodes overdraw their endpoints, grouped by relation
    for relation in Relation::ALL {
        for edge in graph.edges_with_relation(relation) {
            let (Some(&from), Some(&to)) = (positions.get(&edge.from), positions.get(&edge.to))
            else {
                continue;
            };
            draw_arrow(root, to_pixels(from), to_pixels(to), relation)?;
        }
    }

    // Nodes grouped by type
    for node_type in NodeType::ALL {
        let fill = node_type.color().mix(0.8).filled();
        let outline = ShapeStyle {
            color: BLACK.to_rgba(),
            filled: false,
            stroke_width: 2,
        };
        for node in graph.nodes_of_type(node_type) {
            let Some(&pos) = positions.get(&node.id) else {
                continue;
            };
            let (x, y) = to_pixels(pos);
            root.draw(&Circle::new((x, y), NODE_RADIUS, fill))?;
            root.draw(&Circle::new((x, y), NODE_RADIUS, outline))?;
        }
    }

    // Labels over everything
    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for node in graph.nodes() {
        let Some(&pos) = positions.get(&node.id) else {
            continue;
        };
        let (x, y) = to_pixels(pos);
        root.draw(&Text::new(
            node.id.as_str(),
            (x, y + NODE_RADIUS + 4),
            label_style.clone(),
        ))?;
    }

    draw_node_legend(root)?;
    draw_relation_legend(root)?;

    Ok(())
}

/// Draw a directed edge as a colored line with an arrowhead
///
/// The line is shortened at both ends so it meets the node rim rather than
/// the node center.
fn draw_arrow<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    from: (i32, i32),
    to: (i32, i32),
    relation: Relation,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x1, y1) = (f64::from(from.0), f64::from(from.1));
    let (x2, y2) = (f64::from(to.0), f64::from(to.1));
    let (dx, dy) = (x2 - x1, y2 - y1);
    let dist = dx.hypot(dy);
    if dist < 1.0 {
        return Ok(());
    }
    let (ux, uy) = (dx / dist, dy / dist);

    let rim = f64::from(NODE_RADIUS) + 2.0;
    let start = (x1 + ux * rim, y1 + uy * rim);
    let tip = (x2 - ux * rim, y2 - uy * rim);

    let style = ShapeStyle {
        color: relation.color().mix(0.7),
        filled: true,
        stroke_width: relation.stroke_width(),
    };

    root.draw(&PathElement::new(
        vec![
            (start.0 as i32, start.1 as i32),
            (tip.0 as i32, tip.1 as i32),
        ],
        style,
    ))?;

    // Arrowhead triangle at the target rim
    let head = 11.0;
    let base = (tip.0 - ux * head, tip.1 - uy * head);
    let (px, py) = (-uy, ux);
    let left = (base.0 + px * head * 0.45, base.1 + py * head * 0.45);
    let right = (base.0 - px * head * 0.45, base.1 - py * head * 0.45);
    root.draw(&Polygon::new(
        vec![
            (tip.0 as i32, tip.1 as i32),
            (left.0 as i32, left.1 as i32),
            (right.0 as i32, right.1 as i32),
        ],
        style,
    ))?;

    Ok(())
}

/// Node-type legend in the upper-left corner
fn draw_node_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let text_style = TextStyle::from(("sans-serif", 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let x = 24;
    for (i, node_type) in NodeType::ALL.iter().enumerate() {
        let y = 24 + i as i32 * 30;
        root.draw(&Rectangle::new(
            [(x, y), (x + 26, y + 18)],
            node_type.color().filled(),
        ))?;
        root.draw(&Rectangle::new(
            [(x, y), (x + 26, y + 18)],
            BLACK.stroke_width(1),
        ))?;
        root.draw(&Text::new(
            node_type.legend_label(),
            (x + 34, y + 9),
            text_style.clone(),
        ))?;
    }

    Ok(())
}

/// Relation legend in the upper-right corner
fn draw_relation_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let text_style = TextStyle::from(("sans-serif", 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let (width, _) = NETWORK_SIZE;
    let x = width as i32 - 210;
    for (i, relation) in Relation::ALL.iter().enumerate() {
        let y = 24 + i as i32 * 30;
        root.draw(&Rectangle::new(
            [(x, y), (x + 26, y + 18)],
            relation.color().filled(),
        ))?;
        root.draw(&Rectangle::new(
            [(x, y), (x + 26, y + 18)],
            BLACK.stroke_width(1),
        ))?;
        root.draw(&Text::new(
            relation.legend_label(),
            (x + 34, y + 9),
            text_style.clone(),
        ))?;
    }

    Ok(())
}
