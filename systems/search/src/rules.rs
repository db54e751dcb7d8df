//! Rolling transitions and validity checks for the block.

use rolling_block_core::{BlockState, Direction};
use rolling_block_world::Grid;

/// Rolls the block one step in `direction`.
///
/// The result is not validated; pair with [`is_valid`]. Rolling a standing
/// block tips it onto the two cells beyond it, rolling a lying block along its
/// long axis stands it up one cell past the far end, and rolling it across its
/// long axis shifts both cells by one.
#[must_use]
pub fn roll(state: BlockState, direction: Direction) -> BlockState {
    match state.canonical() {
        BlockState::Standing(cell) => match direction {
            Direction::Up => BlockState::lying(cell.offset(-2, 0), cell.offset(-1, 0)),
            Direction::Down => BlockState::lying(cell.offset(1, 0), cell.offset(2, 0)),
            Direction::Left => BlockState::lying(cell.offset(0, -2), cell.offset(0, -1)),
            Direction::Right => BlockState::lying(cell.offset(0, 1), cell.offset(0, 2)),
        },
        // vertical: first is the upper cell
        BlockState::Lying(first, second) if first.column() == second.column() => match direction {
            Direction::Up => BlockState::standing(first.offset(-1, 0)),
            Direction::Down => BlockState::standing(second.offset(1, 0)),
            Direction::Left => BlockState::lying(first.offset(0, -1), second.offset(0, -1)),
            Direction::Right => BlockState::lying(first.offset(0, 1), second.offset(0, 1)),
        },
        // horizontal: first is the left cell
        BlockState::Lying(first, second) => match direction {
            Direction::Left => BlockState::standing(first.offset(0, -1)),
            Direction::Right => BlockState::standing(second.offset(0, 1)),
            Direction::Up => BlockState::lying(first.offset(-1, 0), second.offset(-1, 0)),
            Direction::Down => BlockState::lying(first.offset(1, 0), second.offset(1, 0)),
        },
    }
}

/// Rolls the block toward decreasing rows.
#[must_use]
pub fn roll_up(state: BlockState) -> BlockState {
    roll(state, Direction::Up)
}

/// Rolls the block toward increasing rows.
#[must_use]
pub fn roll_down(state: BlockState) -> BlockState {
    roll(state, Direction::Down)
}

/// Rolls the block toward decreasing columns.
#[must_use]
pub fn roll_left(state: BlockState) -> BlockState {
    roll(state, Direction::Left)
}

/// Rolls the block toward increasing columns.
#[must_use]
pub fn roll_right(state: BlockState) -> BlockState {
    roll(state, Direction::Right)
}

/// Reports whether every cell under the block is inside the grid and open.
///
/// All cells are bounds-checked before any tile is looked up. Adjacency of a
/// lying pair is not re-checked; [`roll`] only ever produces adjacent pairs.
#[must_use]
pub fn is_valid(state: BlockState, grid: &Grid) -> bool {
    state.cells().all(|cell| grid.in_bounds(cell))
        && state.cells().all(|cell| grid.is_passable(cell))
}

/// Valid states reachable from `state` in one roll, in [`Direction::ALL`] order.
pub fn successors(
    state: BlockState,
    grid: &Grid,
) -> impl Iterator<Item = (Direction, BlockState)> + '_ {
    Direction::ALL
        .into_iter()
        .map(move |direction| (direction, roll(state, direction)))
        .filter(move |(_, next)| is_valid(*next, grid))
}
