//! Monotonic board invariant: the board is exactly the replay of history.

use super::Invariant;
use crate::{Board, CellState, GameState};

/// Invariant: Cells are only ever written once per history entry.
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new(game.config());

        for mov in game.history() {
            if reconstructed.get(mov.cell) != Some(CellState::Empty) {
                return false;
            }
            reconstructed.set(mov.cell, mov.player.mark());
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
