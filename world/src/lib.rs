#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable board model for the rolling block solver.
//!
//! A [`Grid`] answers bounds and passability questions about individual
//! cells. A [`Puzzle`] couples a grid with the start and goal cells read from
//! the textual puzzle format; see [`Puzzle::parse`].

use std::{fmt, str::FromStr};

use rolling_block_core::{BlockState, CellCoord};

mod parse;

pub use parse::ParseError;

/// Largest row or column count accepted for a grid.
pub const MAX_GRID_DIMENSION: u32 = 1024;

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// The block may rest on the cell.
    Open,
    /// Obstacle; the block may never touch the cell.
    Blocked,
}

impl Tile {
    const fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocked => '*',
        }
    }
}

/// Dense row-major grid of tiles. Read-only once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    columns: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid from row-major tiles.
    ///
    /// Fails when either dimension is zero or exceeds [`MAX_GRID_DIMENSION`],
    /// or when `tiles` does not hold exactly `rows * columns` entries.
    pub fn new(rows: u32, columns: u32, tiles: Vec<Tile>) -> Result<Self, ParseError> {
        if !dimension_in_range(rows) || !dimension_in_range(columns) {
            return Err(ParseError::DimensionOutOfRange { rows, columns });
        }

        let expected = rows as usize * columns as usize;
        if tiles.len() != expected {
            return Err(ParseError::TileCount {
                expected,
                found: tiles.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            tiles,
        })
    }

    /// Creates a grid where every cell is open.
    pub fn open(rows: u32, columns: u32) -> Result<Self, ParseError> {
        let count = (rows as usize).saturating_mul(columns as usize);
        Self::new(rows, columns, vec![Tile::Open; count])
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, cell: CellCoord) -> bool {
        self.index(cell).is_some()
    }

    /// Reports whether the block may rest on the cell.
    ///
    /// Cells outside the grid are never passable.
    #[must_use]
    pub fn is_passable(&self, cell: CellCoord) -> bool {
        self.tile(cell) == Some(Tile::Open)
    }

    /// Tile stored at the cell, if it lies inside the grid.
    #[must_use]
    pub fn tile(&self, cell: CellCoord) -> Option<Tile> {
        self.index(cell)
            .and_then(|index| self.tiles.get(index).copied())
    }

    /// Iterator over every in-bounds cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.columns as i32;
        (0..self.rows as i32)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(row, column)))
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        let row = u32::try_from(cell.row()).ok()?;
        let column = u32::try_from(cell.column()).ok()?;
        if row >= self.rows || column >= self.columns {
            return None;
        }

        let width = usize::try_from(self.columns).ok()?;
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}

const fn dimension_in_range(value: u32) -> bool {
    value > 0 && value <= MAX_GRID_DIMENSION
}

/// A grid together with the cells the block starts and finishes on.
///
/// Both the start and the goal are standing orientations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    start: CellCoord,
    goal: CellCoord,
}

impl Puzzle {
    /// Creates a puzzle, rejecting start or goal cells that are not passable.
    pub fn new(grid: Grid, start: CellCoord, goal: CellCoord) -> Result<Self, ParseError> {
        if !grid.is_passable(start) {
            return Err(ParseError::ImpassableMarker { cell: start });
        }
        if !grid.is_passable(goal) {
            return Err(ParseError::ImpassableMarker { cell: goal });
        }

        Ok(Self { grid, start, goal })
    }

    /// Parses a puzzle from its textual form.
    ///
    /// The first non-blank line holds the row and column counts. The
    /// following lines hold one grid row each using `.` for open cells, `*`
    /// for obstacles, `S` for the start and `G` for the goal (either case).
    /// Whitespace within a row is ignored and blank lines are skipped.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse::parse_puzzle(input)
    }

    /// Board the puzzle is played on.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell marked as the start.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        self.start
    }

    /// Cell marked as the goal.
    #[must_use]
    pub const fn goal(&self) -> CellCoord {
        self.goal
    }

    /// Block standing on the start cell.
    #[must_use]
    pub const fn start_state(&self) -> BlockState {
        BlockState::standing(self.start)
    }

    /// Block standing on the goal cell.
    #[must_use]
    pub const fn goal_state(&self) -> BlockState {
        BlockState::standing(self.goal)
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

/// Renders the puzzle in the same format [`Puzzle::parse`] accepts.
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.grid.rows, self.grid.columns)?;
        for cell in self.grid.cells() {
            let symbol = if cell == self.start {
                'S'
            } else if cell == self.goal {
                'G'
            } else {
                self.grid.tile(cell).map_or('*', Tile::symbol)
            };
            write!(f, "{symbol}")?;
            if cell.column() + 1 == self.grid.columns as i32 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
