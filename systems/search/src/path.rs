//! Converts a sequence of states into named moves.

use rolling_block_core::{BlockState, Direction, Move};

use crate::{rules, SearchError};

/// Names the roll joining each consecutive pair of `states`.
///
/// Every roll of the earlier state is recomputed and compared against the
/// later one. Fails with [`SearchError::BrokenPath`] when no single roll
/// connects a pair.
pub fn name_moves(states: &[BlockState]) -> Result<Vec<Move>, SearchError> {
    states
        .windows(2)
        .enumerate()
        .map(|(step, pair)| {
            let (previous, next) = (pair[0], pair[1]);
            Direction::ALL
                .into_iter()
                .find(|&direction| rules::roll(previous, direction) == next)
                .map(|direction| Move::new(direction, next))
                .ok_or(SearchError::BrokenPath { step })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolling_block_core::CellCoord;

    #[test]
    fn names_each_roll() {
        let states = [
            BlockState::standing(CellCoord::new(2, 1)),
            BlockState::lying(CellCoord::new(0, 1), CellCoord::new(1, 1)),
            BlockState::lying(CellCoord::new(0, 2), CellCoord::new(1, 2)),
        ];

        let moves = name_moves(&states).expect("connected path");

        assert_eq!(
            moves,
            vec![
                Move::new(Direction::Up, states[1]),
                Move::new(Direction::Right, states[2]),
            ]
        );
    }

    #[test]
    fn single_state_has_no_moves() {
        let moves = name_moves(&[BlockState::standing(CellCoord::new(0, 0))]).expect("no pairs");
        assert!(moves.is_empty());
    }

    #[test]
    fn rejects_disconnected_states() {
        let states = [
            BlockState::standing(CellCoord::new(0, 0)),
            BlockState::lying(CellCoord::new(0, 1), CellCoord::new(0, 2)),
            BlockState::standing(CellCoord::new(4, 4)),
        ];

        assert_eq!(
            name_moves(&states),
            Err(SearchError::BrokenPath { step: 1 })
        );
    }
}
