//! Contract-based validation for moves and undos.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, InvariantViolation, MnkInvariants};
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a terminal state.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell must be on the board.
pub struct CellInRange;

impl CellInRange {
    /// Fails with [`MoveError::OutOfRange`] for an off-board index.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let num_cells = game.board().num_cells();
        if mov.cell >= num_cells {
            Err(MoveError::OutOfRange {
                cell: mov.cell,
                num_cells,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] for a marked cell.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(mov.cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.cell))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] when the mover is not to move.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.current_player {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for placing a mark.
///
/// Checked in order: game not over, cell in range, cell empty, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellInRange::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Precondition for undo: the move must be the top of the history.
pub struct LastMoveMatches;

impl LastMoveMatches {
    /// Fails when history is empty or its last entry differs from `mov`.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        match game.history().last() {
            None => Err(MoveError::NothingToUndo),
            Some(last) if last != mov => Err(MoveError::UndoMismatch {
                requested: *mov,
                last: *last,
            }),
            Some(_) => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

fn invariant_error(context: &str, violations: Vec<InvariantViolation>) -> MoveError {
    let descriptions = violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    warn!(context, %descriptions, "Postcondition failed");
    MoveError::InvariantViolation(format!("{} postcondition failed: {}", context, descriptions))
}

/// Contract for placing a mark.
///
/// Postconditions: all [`MnkInvariants`] hold, and exactly one move was
/// appended to the previous history.
pub struct ApplyContract;

impl Contract<GameState, Move> for ApplyContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        MnkInvariants::check_all(after).map_err(|v| invariant_error("Apply", v))?;

        let extends = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !extends {
            return Err(invariant_error(
                "Apply",
                vec![InvariantViolation::new("History grows by exactly one move")],
            ));
        }
        Ok(())
    }
}

/// Contract for undoing the most recent move.
///
/// Postconditions: all [`MnkInvariants`] hold, and the history is the
/// previous history minus its last entry.
pub struct UndoContract;

impl Contract<GameState, Move> for UndoContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LastMoveMatches::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        MnkInvariants::check_all(after).map_err(|v| invariant_error("Undo", v))?;

        let prior = before.history().split_last().map(|(_, rest)| rest);
        if prior != Some(after.history()) {
            return Err(invariant_error(
                "Undo",
                vec![InvariantViolation::new("History shrinks by exactly one move")],
            ));
        }
        Ok(())
    }
}
