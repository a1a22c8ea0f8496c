//! Outcome invariant: a recorded winner is the last mover, holding a line.

use super::Invariant;
use crate::GameState;
use crate::rules::has_line;

/// Invariant: `outcome` is set exactly when the last move completed a line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let last_mover_has_line = game
            .history()
            .last()
            .is_some_and(|m| has_line(game.board(), game.config(), m.player));

        match game.outcome() {
            Some(winner) => {
                last_mover_has_line && game.history().last().map(|m| m.player) == Some(winner)
            }
            None => !last_mover_has_line,
        }
    }

    fn description() -> &'static str {
        "Outcome is set exactly when the last move completed a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Player};

    #[test]
    fn test_in_progress_holds() {
        let mut game = GameState::new(GameConfig::classic());
        game.apply_move(0).unwrap();
        assert!(OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_won_game_holds() {
        let mut game = GameState::new(GameConfig::classic());
        for cell in [0, 4, 1, 5, 2] {
            game.apply_move(cell).unwrap();
        }
        assert_eq!(game.outcome(), Some(Player::X));
        assert!(OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_missing_outcome_violates() {
        let mut game = GameState::new(GameConfig::classic());
        for cell in [0, 4, 1, 5, 2] {
            game.apply_move(cell).unwrap();
        }
        game.outcome = None;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_winner_violates() {
        let mut game = GameState::new(GameConfig::classic());
        for cell in [0, 4, 1, 5, 2] {
            game.apply_move(cell).unwrap();
        }
        game.outcome = Some(Player::O);
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
