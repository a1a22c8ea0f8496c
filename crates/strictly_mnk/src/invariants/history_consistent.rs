//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::GameState;

/// Invariant: History length, move counter and occupied cells agree.
///
/// Every move in history corresponds to exactly one occupied cell.
/// No moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let occupied = game.board().occupied_count();
        game.history().len() == occupied && game.num_moves() == occupied
    }

    fn description() -> &'static str {
        "History length and move count match number of occupied cells"
    }
}
