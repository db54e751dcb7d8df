use std::io::{self, Write};

use anyhow::{Context, Result};
use rolling_block_core::{CellCoord, Direction, Orientation};
use rolling_block_system_search::{Outcome, SearchReport, SearchStats};
use serde::Serialize;

use crate::config::OutputFormat;

const NO_SOLUTION: &str = "Sorry! There is no solution to this maze.";
const NO_SOLUTION_DETAIL: &str =
    "The Goal state cannot be reached from the Start state in any possible way.";
const FROM_START: &str = "From the Start state...";
const REACHED_GOAL: &str = "The block has now reached the Goal state.";

/// Writes the report in the requested format.
///
/// Statistics are embedded in JSON output; in text mode they go to
/// `diagnostics` so the narrated answer stays unchanged.
pub(crate) fn write_report(
    out: &mut impl Write,
    diagnostics: &mut impl Write,
    report: &SearchReport,
    format: OutputFormat,
    stats: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            write_text(out, report).context("failed to write report")?;
            if stats {
                write_stats(diagnostics, report.stats())
                    .context("failed to write search statistics")?;
            }
        }
        OutputFormat::Json => {
            let json = JsonReport::new(report, stats);
            serde_json::to_writer_pretty(&mut *out, &json).context("failed to write report")?;
            writeln!(out).context("failed to write report")?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &SearchReport) -> io::Result<()> {
    match report.outcome() {
        Outcome::Unreachable => {
            writeln!(out, "{NO_SOLUTION}")?;
            writeln!(out, "{NO_SOLUTION_DETAIL}")?;
        }
        Outcome::Solved(solution) => {
            writeln!(
                out,
                "The block can reach from the Start to the Goal state in a minimum of {} moves.",
                solution.move_count()
            )?;
            writeln!(out, "{FROM_START}")?;
            for step in solution.moves() {
                writeln!(out, "{step}")?;
            }
            writeln!(out, "{REACHED_GOAL}")?;
        }
    }
    Ok(())
}

fn write_stats(out: &mut impl Write, stats: SearchStats) -> io::Result<()> {
    write!(
        out,
        "search: expanded {} states, discovered {}, peak frontier {}",
        stats.expanded, stats.discovered, stats.peak_frontier
    )?;
    if let Some(depth) = stats.depth {
        write!(out, ", goal depth {depth}")?;
    }
    writeln!(out)
}

#[derive(Debug, Serialize)]
struct JsonReport {
    solvable: bool,
    moves: Option<usize>,
    steps: Vec<JsonStep>,
    stats: Option<SearchStats>,
}

#[derive(Debug, Serialize)]
struct JsonStep {
    direction: Direction,
    orientation: Orientation,
    cells: Vec<CellCoord>,
}

impl JsonReport {
    fn new(report: &SearchReport, stats: bool) -> Self {
        let solution = report.solution();
        let steps = solution
            .map(|solution| {
                solution
                    .moves()
                    .iter()
                    .map(|step| JsonStep {
                        direction: step.direction(),
                        orientation: step.result().orientation(),
                        cells: step.result().cells().collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            solvable: solution.is_some(),
            moves: solution.map(|solution| solution.move_count()),
            steps,
            stats: stats.then(|| report.stats()),
        }
    }
}
