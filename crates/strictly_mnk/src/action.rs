//! First-class action types for m,n,k-games.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::config::GameConfig;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark on a cell.
///
/// Moves are what the history records, what undo consumes and what a
/// [`GameRecord`](crate::GameRecord) persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the cell receiving the mark.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Formats an action as `<mark>(<row>,<col>)`, e.g. `x(0,2)`.
///
/// Display only; there is no parser for this form.
#[instrument(skip(config))]
pub fn action_to_string(config: &GameConfig, player: Player, action: usize) -> String {
    let (row, col) = config.coords(action);
    format!("{}({},{})", player.mark().glyph(), row, col)
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a caller bug. Operations that return one have left the
/// game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The cell index is off the board.
    #[display("Cell {} out of range (board has {} cells)", cell, num_cells)]
    OutOfRange {
        /// Requested cell.
        cell: usize,
        /// Number of cells on the board.
        num_cells: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// Undo was requested with no moves played.
    #[display("No move to undo")]
    NothingToUndo,

    /// Undo does not name the most recent move.
    #[display("Undo of {} does not match last move {}", requested, last)]
    UndoMismatch {
        /// Move the caller asked to undo.
        requested: Move,
        /// Move actually on top of the history.
        last: Move,
    },

    /// A player id outside {0, 1}.
    #[display("Invalid player id {}", _0)]
    InvalidPlayer(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
