#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Breadth-first search that finds the fewest rolls between two block states.
//!
//! The [`Solver`] expands states in discovery order from a FIFO frontier and
//! records every discovered state in a [`SearchTree`] together with the node it
//! was first reached from. Because the frontier is strictly first-in
//! first-out, the first time the goal is dequeued it sits at the minimum depth,
//! so walking its parents yields a shortest roll sequence.

use std::collections::{HashMap, HashSet, VecDeque};

use rolling_block_core::{BlockState, Move};
use rolling_block_world::Grid;
use serde::{Deserialize, Serialize};

mod path;
pub mod rules;
mod tree;

pub use path::name_moves;
pub use tree::{NodeId, SearchTree};

/// How the search avoids re-expanding states it has already seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleSuppression {
    /// Skip any neighbor that was discovered before. Each state is expanded at
    /// most once.
    #[default]
    Visited,
    /// Skip the neighbor equal to the expanding node's parent.
    ///
    /// A state may be recorded again when reached from a different state in
    /// the same layer it was first discovered in. It is never recorded in a
    /// deeper layer, and each roll between two states is recorded once, so a
    /// run records at most four nodes per placement.
    ParentOnly,
}

/// Tunables for a [`Solver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Cycle suppression strategy used while expanding nodes.
    pub cycle_suppression: CycleSuppression,
}

/// Counters describing the work performed by one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes removed from the frontier.
    pub expanded: usize,
    /// Nodes recorded in the search tree, including the start.
    pub discovered: usize,
    /// Largest number of nodes waiting in the frontier at once.
    pub peak_frontier: usize,
    /// Depth of the goal node, when it was reached.
    pub depth: Option<usize>,
}

/// Shortest roll sequence from the start state to the goal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    states: Vec<BlockState>,
    moves: Vec<Move>,
}

impl Solution {
    /// States visited in order, starting with the start state and ending with
    /// the goal state.
    #[must_use]
    pub fn states(&self) -> &[BlockState] {
        &self.states
    }

    /// Rolls joining consecutive states.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Minimum number of rolls required.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached.
    Solved(Solution),
    /// The goal is not connected to the start; a normal negative answer.
    Unreachable,
}

/// Outcome of a search run together with its statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    outcome: Outcome,
    stats: SearchStats,
}

impl SearchReport {
    /// Whether and how the goal was reached.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Work performed while searching.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Solution found by the run, if any.
    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            Outcome::Solved(solution) => Some(solution),
            Outcome::Unreachable => None,
        }
    }

    /// Consumes the report, yielding the outcome.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }
}

/// Errors raised when a search cannot be carried out as requested.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start state does not fit on open cells of the grid.
    #[error("start state {0} is not valid on the grid")]
    InvalidStart(BlockState),
    /// The goal state does not fit on open cells of the grid.
    #[error("goal state {0} is not valid on the grid")]
    InvalidGoal(BlockState),
    /// Two consecutive states of a path are not joined by a single roll.
    #[error("path is broken after step {step}: no single roll joins the next state")]
    BrokenPath {
        /// Zero-based index of the earlier state of the offending pair.
        step: usize,
    },
}

/// Breadth-first solver with reusable scratch buffers.
#[derive(Debug, Default)]
pub struct Solver {
    config: SearchConfig,
    tree: SearchTree,
    frontier: VecDeque<NodeId>,
    discovered: HashSet<BlockState>,
    first_depth: HashMap<BlockState, usize>,
    recorded_rolls: HashSet<(BlockState, BlockState)>,
}

impl Solver {
    /// Creates a solver that searches with the provided configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Configuration applied to every run.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Parent-pointer tree built by the most recent run.
    #[must_use]
    pub const fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Finds a shortest roll sequence from `start` to `goal` on `grid`.
    ///
    /// Returns [`Outcome::Unreachable`] when the frontier empties without
    /// reaching the goal. Fails when either endpoint is not a valid state on
    /// the grid.
    pub fn solve(
        &mut self,
        grid: &Grid,
        start: BlockState,
        goal: BlockState,
    ) -> Result<SearchReport, SearchError> {
        if !rules::is_valid(start, grid) {
            return Err(SearchError::InvalidStart(start));
        }
        if !rules::is_valid(goal, grid) {
            return Err(SearchError::InvalidGoal(goal));
        }

        self.tree.clear();
        self.frontier.clear();
        self.discovered.clear();
        self.first_depth.clear();
        self.recorded_rolls.clear();

        let mut stats = SearchStats::default();

        let root = self.tree.insert_root(start);
        self.frontier.push_back(root);
        let _ = self.discovered.insert(start);
        let _ = self.first_depth.insert(start, 0);
        stats.discovered = 1;
        stats.peak_frontier = 1;

        while let Some(node) = self.frontier.pop_front() {
            stats.expanded += 1;

            let (Some(state), Some(depth)) = (self.tree.state(node), self.tree.depth(node)) else {
                continue;
            };

            if state == goal {
                let states = self.tree.path_to(node);
                let moves = name_moves(&states)?;
                stats.depth = Some(depth);
                return Ok(SearchReport {
                    outcome: Outcome::Solved(Solution { states, moves }),
                    stats,
                });
            }

            let parent = self
                .tree
                .parent(node)
                .and_then(|parent| self.tree.state(parent));

            for (_, next) in rules::successors(state, grid) {
                if parent == Some(next) {
                    continue;
                }
                if !self.admit(state, next, depth + 1) {
                    continue;
                }

                let child = self.tree.insert_child(node, depth + 1, next);
                self.frontier.push_back(child);
                stats.discovered += 1;
            }

            stats.peak_frontier = stats.peak_frontier.max(self.frontier.len());
        }

        Ok(SearchReport {
            outcome: Outcome::Unreachable,
            stats,
        })
    }

    /// Decides whether rolling from `state` onto `next` records a new node.
    fn admit(&mut self, state: BlockState, next: BlockState, depth: usize) -> bool {
        match self.config.cycle_suppression {
            CycleSuppression::Visited => self.discovered.insert(next),
            CycleSuppression::ParentOnly => {
                let first = *self.first_depth.entry(next).or_insert(depth);
                first == depth && self.recorded_rolls.insert((state, next))
            }
        }
    }
}

/// Finds a shortest roll sequence with a one-off [`Solver`].
pub fn search(
    grid: &Grid,
    start: BlockState,
    goal: BlockState,
    config: SearchConfig,
) -> Result<SearchReport, SearchError> {
    Solver::new(config).solve(grid, start, goal)
}
