#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that solves rolling block puzzles.

mod config;
mod report;

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use rolling_block_system_search::Solver;
use rolling_block_world::Puzzle;

use crate::config::{CliConfig, OutputFormat, SuppressionArg};

/// Finds the fewest rolls that carry a 1x1x2 block from its start cell to its goal cell.
#[derive(Debug, Parser)]
#[command(name = "rolling-block", version)]
struct Args {
    /// Puzzle file to solve; reads stdin when omitted or `-`.
    input: Option<PathBuf>,
    /// TOML configuration file with `[search]` and `[output]` tables.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Cycle suppression strategy used by the search.
    #[arg(long, value_enum)]
    cycle_suppression: Option<SuppressionArg>,
    /// Output format for the answer.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Report search statistics.
    #[arg(long)]
    stats: bool,
}

/// Entry point for the rolling block command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    }
    .with_overrides(args.cycle_suppression, args.format, args.stats);

    let text = read_input(args.input.as_deref())?;
    let puzzle = Puzzle::parse(&text).context("malformed puzzle input")?;

    let mut solver = Solver::new(config.search);
    let report = solver
        .solve(puzzle.grid(), puzzle.start_state(), puzzle.goal_state())
        .context("search failed")?;

    report::write_report(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &report,
        config.output.format,
        config.output.stats,
    )
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle file at {}", path.display())),
        _ => {
            let mut text = String::new();
            let _ = io::stdin()
                .read_to_string(&mut text)
                .context("failed to read puzzle from stdin")?;
            Ok(text)
        }
    }
}
