// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stats command - renders node-type and relation-type tallies as bar charts

use crate::dataset;
use crate::types::{NodeType, Relation};
use anyhow::{anyhow, Context, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::Path;
use tracing::info;

/// Pixel dimensions of the statistics figure (two charts side by side)
const STATS_SIZE: (u32, u32) = (1500, 600);

/// Bar color of the relation chart
const RELATION_BAR: RGBColor = RGBColor(108, 92, 231);

/// Run the stats command: tally charts to PNG and SVG
pub fn run(out_dir: &Path) -> Result<()> {
    let graph = dataset::build()?;

    let node_counts = graph.node_type_tally();
    let node_tally: Vec<(NodeType, usize)> = NodeType::ALL
        .iter()
        .map(|t| (*t, node_counts.get(t).copied().unwrap_or(0)))
        .collect();

    let relation_counts = graph.relation_tally();
    let relation_tally: Vec<(Relation, usize)> = Relation::ALL
        .iter()
        .map(|r| (*r, relation_counts.get(r).copied().unwrap_or(0)))
        .collect();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory {}", out_dir.display()))?;

    let png_path = out_dir.join("ps2_games_statistics.png");
    let svg_path = out_dir.join("ps2_games_statistics.svg");

    info!("Rendering statistics charts");

    {
        let root = BitMapBackend::new(&png_path, STATS_SIZE).into_drawing_area();
        draw_statistics(&root, &node_tally, &relation_tally)
            .map_err(|e| anyhow!("Failed to draw statistics charts: {e}"))?;
        root.present()
            .map_err(|e| anyhow!("Failed to write {}: {e}", png_path.display()))?;
    }
    {
        let root = SVGBackend::new(&svg_path, STATS_SIZE).into_drawing_area();
        draw_statistics(&root, &node_tally, &relation_tally)
            .map_err(|e| anyhow!("Failed to draw statistics charts: {e}"))?;
        root.present()
            .map_err(|e| anyhow!("Failed to write {}: {e}", svg_path.display()))?;
    }

    println!(
        "Statistics chart saved as '{}' and '{}'",
        png_path.display(),
        svg_path.display()
    );

    Ok(())
}

/// Draw both tally charts side by side
fn draw_statistics<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    node_tally: &[(NodeType, usize)],
    relation_tally: &[(Relation, usize)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (left, right) = root.split_horizontally(STATS_SIZE.0 as i32 / 2);

    draw_bar_chart(
        &left,
        "Node Types in PS2 Games Knowledge Graph",
        &node_tally
            .iter()
            .map(|(t, c)| (t.tag(), *c, t.color()))
            .collect::<Vec<_>>(),
    )?;

    draw_bar_chart(
        &right,
        "Relationship Types",
        &relation_tally
            .iter()
            .map(|(r, c)| (r.tag(), *c, RELATION_BAR))
            .collect::<Vec<_>>(),
    )?;

    Ok(())
}

/// Draw one bar chart with a value annotation above each bar
fn draw_bar_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    bars: &[(&str, usize, RGBColor)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let max = bars.iter().map(|(_, c, _)| *c).max().unwrap_or(0) as u32;
    let n = bars.len() as u32;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(24)
        .x_label_area_size(44)
        .y_label_area_size(48)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..max + 2)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Count")
        .axis_desc_style(("sans-serif", 18))
        .x_label_style(("sans-serif", 14))
        .x_label_formatter(&|v| {
            let i = match v {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i as usize,
                SegmentValue::Last => return String::new(),
            };
            bars.get(i).map_or_else(String::new, |(tag, _, _)| (*tag).to_string())
        })
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, count, color))| {
        let i = i as u32;
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), *count as u32),
            ],
            color.filled(),
        )
    }))?;

    // Value annotations above each bar
    let value_style = TextStyle::from(("sans-serif", 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(bars.iter().enumerate().map(|(i, (_, count, _))| {
        Text::new(
            format!("{count}"),
            (SegmentValue::CenterOf(i as u32), *count as u32),
            value_style.clone(),
        )
    }))?;

    Ok(())
}
