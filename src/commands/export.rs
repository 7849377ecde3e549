// SPDX-License-Identifier: MIT OR Apache-2.0
//! Export command - exports the knowledge graph to machine-readable formats

use crate::dataset;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
}

impl ExportFormat {
    /// Parse format from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Some(Self::Dot),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

/// Run the export command
pub fn run(format: &str, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format);

    let export_format = ExportFormat::parse(format).ok_or_else(|| {
        anyhow::anyhow!("Unknown export format: {}. Supported: dot, json", format)
    })?;

    let graph = dataset::build()?;

    let content = match export_format {
        ExportFormat::Dot => graph.to_dot(),
        ExportFormat::Json => graph.to_json()?,
    };

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
