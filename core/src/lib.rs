#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the rolling block solver.
//!
//! This crate defines the value types that connect the grid model, the search
//! system, and the adapters. The world crate answers questions about
//! [`CellCoord`] values, the search system rolls [`BlockState`] values in a
//! [`Direction`] and narrates the answer as a list of [`Move`] values, and the
//! adapters render those moves for people or machines.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Location of a single grid cell expressed as row and column coordinates.
///
/// Coordinates are signed: rolling a block off the top or left edge of the
/// grid produces negative indices, which validity checks then reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: i32,
    column: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Returns the cell displaced by the provided row and column deltas.
    #[must_use]
    pub const fn offset(self, rows: i32, columns: i32) -> Self {
        Self {
            row: self.row.saturating_add(rows),
            column: self.column.saturating_add(columns),
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Orthogonal directions in which the block can roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Roll toward decreasing row indices.
    Up,
    /// Roll toward increasing row indices.
    Down,
    /// Roll toward increasing column indices.
    Right,
    /// Roll toward decreasing column indices.
    Left,
}

impl Direction {
    /// Every direction in the order the search expands them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Lowercase name of the direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the block rests on one cell or across two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The block occupies a single cell.
    Standing,
    /// The block occupies two orthogonally adjacent cells.
    Lying,
}

/// Position and orientation of the 1×1×2 block.
///
/// Two `Lying` states compare equal when they cover the same unordered pair of
/// cells, so `Lying(a, b) == Lying(b, a)`. Use [`BlockState::lying`] to obtain
/// the canonical ordering, smaller coordinate first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum BlockState {
    /// The block stands upright on one cell.
    Standing(CellCoord),
    /// The block lies across two orthogonally adjacent cells.
    Lying(CellCoord, CellCoord),
}

impl BlockState {
    /// Creates a standing block on the provided cell.
    #[must_use]
    pub const fn standing(cell: CellCoord) -> Self {
        Self::Standing(cell)
    }

    /// Creates a lying block across the provided cells in canonical order.
    #[must_use]
    pub fn lying(first: CellCoord, second: CellCoord) -> Self {
        if second < first {
            Self::Lying(second, first)
        } else {
            Self::Lying(first, second)
        }
    }

    /// Returns the same state with any lying pair stored in canonical order.
    #[must_use]
    pub fn canonical(self) -> Self {
        match self {
            Self::Standing(_) => self,
            Self::Lying(first, second) => Self::lying(first, second),
        }
    }

    /// Orientation of the block.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        match self {
            Self::Standing(_) => Orientation::Standing,
            Self::Lying(..) => Orientation::Lying,
        }
    }

    /// Cells covered by the block, in canonical order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let (first, second) = match self.canonical() {
            Self::Standing(cell) => (cell, None),
            Self::Lying(first, second) => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }
}

impl PartialEq for BlockState {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Standing(left), Self::Standing(right)) => left == right,
            (Self::Lying(a1, b1), Self::Lying(a2, b2)) => {
                (a1 == a2 && b1 == b2) || (a1 == b2 && b1 == a2)
            }
            _ => false,
        }
    }
}

impl Eq for BlockState {}

impl Hash for BlockState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.canonical() {
            Self::Standing(cell) => {
                0_u8.hash(state);
                cell.hash(state);
            }
            Self::Lying(first, second) => {
                1_u8.hash(state);
                first.hash(state);
                second.hash(state);
            }
        }
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            Self::Standing(cell) => write!(f, "standing at {cell}"),
            Self::Lying(first, second) => write!(f, "lying at {first},{second}"),
        }
    }
}

/// A single roll of the block together with the state it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    direction: Direction,
    result: BlockState,
}

impl Move {
    /// Creates a move that rolled the block in `direction` into `result`.
    #[must_use]
    pub fn new(direction: Direction, result: BlockState) -> Self {
        Self {
            direction,
            result: result.canonical(),
        }
    }

    /// Direction in which the block rolled.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// State of the block after the roll.
    #[must_use]
    pub const fn result(&self) -> BlockState {
        self.result
    }
}

/// Narrates the move, e.g. `Roll up so that the block stands at the coordinates (0,1)`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Up | Direction::Down => write!(f, "Roll {}", self.direction)?,
            Direction::Right | Direction::Left => write!(f, "Roll towards {}", self.direction)?,
        }

        match self.result.canonical() {
            BlockState::Standing(cell) => {
                write!(f, " so that the block stands at the coordinates {cell}")
            }
            BlockState::Lying(first, second) => {
                write!(f, " so that the block lies at the coordinates {first},{second}")
            }
        }
    }
}
