//! Text format reader for [`Puzzle`] values.

use rolling_block_core::CellCoord;

use crate::{dimension_in_range, Grid, Puzzle, Tile, MAX_GRID_DIMENSION};

/// Reasons a puzzle description is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained no dimension line.
    #[error("puzzle input is empty; expected a `rows columns` line")]
    MissingDimensions,
    /// The dimension line was not two whitespace separated integers.
    #[error("could not parse grid dimensions '{0}'; expected `rows columns`")]
    InvalidDimensions(String),
    /// A dimension was zero or larger than [`MAX_GRID_DIMENSION`].
    #[error(
        "grid dimensions {rows}x{columns} are out of range (1..={max})",
        max = MAX_GRID_DIMENSION
    )]
    DimensionOutOfRange {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
    /// Fewer grid rows were supplied than the dimension line announced.
    #[error("expected {expected} grid rows but found {found}")]
    MissingRows {
        /// Announced row count.
        expected: u32,
        /// Rows actually present.
        found: u32,
    },
    /// A grid row held the wrong number of cells.
    #[error("row {row} has {found} cells but the grid has {expected} columns")]
    RowLength {
        /// Zero-based index of the offending row.
        row: u32,
        /// Announced column count.
        expected: u32,
        /// Cells actually present in the row.
        found: usize,
    },
    /// A cell used a character outside `.`, `*`, `S` and `G`.
    #[error("unknown tile '{tile}' at ({row},{column})")]
    UnknownTile {
        /// Zero-based row of the cell.
        row: u32,
        /// Zero-based column of the cell.
        column: u32,
        /// Offending character.
        tile: char,
    },
    /// No cell was marked as the start.
    #[error("the grid has no start cell marked with 'S'")]
    MissingStart,
    /// No cell was marked as the goal.
    #[error("the grid has no goal cell marked with 'G'")]
    MissingGoal,
    /// More than one cell was marked as the start.
    #[error("the grid marks more than one start cell: {first} and {second}")]
    DuplicateStart {
        /// First start marker encountered.
        first: CellCoord,
        /// Second start marker encountered.
        second: CellCoord,
    },
    /// More than one cell was marked as the goal.
    #[error("the grid marks more than one goal cell: {first} and {second}")]
    DuplicateGoal {
        /// First goal marker encountered.
        first: CellCoord,
        /// Second goal marker encountered.
        second: CellCoord,
    },
    /// Non-blank text followed the last grid row.
    #[error("unexpected input after the grid on line {line}")]
    TrailingInput {
        /// One-based line number of the first extra line.
        line: usize,
    },
    /// The tile buffer does not match the grid dimensions.
    #[error("expected {expected} tiles but found {found}")]
    TileCount {
        /// Tiles required by the dimensions.
        expected: usize,
        /// Tiles supplied.
        found: usize,
    },
    /// A start or goal cell does not lie on an open tile.
    #[error("start and goal cells must be open tiles; {cell} is not")]
    ImpassableMarker {
        /// The offending cell.
        cell: CellCoord,
    },
}

pub(crate) fn parse_puzzle(input: &str) -> Result<Puzzle, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(ParseError::MissingDimensions)?;
    let (rows, columns) = parse_dimensions(header)?;
    if !dimension_in_range(rows) || !dimension_in_range(columns) {
        return Err(ParseError::DimensionOutOfRange { rows, columns });
    }

    let mut tiles = Vec::with_capacity(rows as usize * columns as usize);
    let mut start = None;
    let mut goal = None;

    for row in 0..rows {
        let Some((_, line)) = lines.next() else {
            return Err(ParseError::MissingRows {
                expected: rows,
                found: row,
            });
        };

        let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != columns as usize {
            return Err(ParseError::RowLength {
                row,
                expected: columns,
                found: symbols.len(),
            });
        }

        for (column, symbol) in (0..columns).zip(symbols) {
            let cell = CellCoord::new(row as i32, column as i32);
            let tile = match symbol {
                '.' => Tile::Open,
                '*' => Tile::Blocked,
                'S' | 's' => {
                    if let Some(first) = start.replace(cell) {
                        return Err(ParseError::DuplicateStart {
                            first,
                            second: cell,
                        });
                    }
                    Tile::Open
                }
                'G' | 'g' => {
                    if let Some(first) = goal.replace(cell) {
                        return Err(ParseError::DuplicateGoal {
                            first,
                            second: cell,
                        });
                    }
                    Tile::Open
                }
                tile => return Err(ParseError::UnknownTile { row, column, tile }),
            };
            tiles.push(tile);
        }
    }

    if let Some((index, _)) = lines.next() {
        return Err(ParseError::TrailingInput { line: index + 1 });
    }

    let start = start.ok_or(ParseError::MissingStart)?;
    let goal = goal.ok_or(ParseError::MissingGoal)?;
    let grid = Grid::new(rows, columns, tiles)?;
    Puzzle::new(grid, start, goal)
}

fn parse_dimensions(header: &str) -> Result<(u32, u32), ParseError> {
    let invalid = || ParseError::InvalidDimensions(header.trim().to_owned());

    let mut parts = header.split_whitespace();
    let rows = parts.next().ok_or_else(invalid)?;
    let columns = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    let rows = rows.parse::<u32>().map_err(|_| invalid())?;
    let columns = columns.parse::<u32>().map_err(|_| invalid())?;
    Ok((rows, columns))
}
