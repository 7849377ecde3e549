// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Ps2graph CLI - knowledge-graph visualizer for PS2-era games

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use ps2graph::commands;
use ps2graph::layout::DEFAULT_SEED;

#[derive(Parser)]
#[command(name = "ps2graph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Directory for the exported image files
    #[arg(long, global = true, env = "PS2GRAPH_OUT_DIR", default_value = ".")]
    out_dir: std::path::PathBuf,

    /// Layout seed (same seed, same diagram)
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the network diagram (PNG + SVG)
    Render,

    /// Render the statistics bar charts (PNG + SVG)
    Stats,

    /// Export the graph to machine-readable formats
    Export {
        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command; with none given, run the full pipeline
    match cli.command {
        None => {
            commands::render::run(&cli.out_dir, cli.seed)?;
            commands::stats::run(&cli.out_dir)
        }
        Some(Commands::Render) => commands::render::run(&cli.out_dir, cli.seed),
        Some(Commands::Stats) => commands::stats::run(&cli.out_dir),
        Some(Commands::Export { format, output }) => commands::export::run(&format, output),
        Some(Commands::Completions { shell }) => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
