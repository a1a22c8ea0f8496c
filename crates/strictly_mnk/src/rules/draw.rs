//! Draw detection.

use crate::board::Board;
use crate::config::GameConfig;
use crate::types::CellState;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != CellState::Empty)
}

/// A full board with no line for either player.
#[instrument(skip(board, config))]
pub fn is_draw(board: &Board, config: &GameConfig) -> bool {
    is_full(board) && super::win::check_winner(board, config).is_none()
}
