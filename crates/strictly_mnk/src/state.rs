//! Reversible game state for m,n,k-games.

use crate::action::{Move, MoveError, action_to_string};
use crate::board::Board;
use crate::config::GameConfig;
use crate::contracts::{ApplyContract, Contract, UndoContract};
use crate::observation::ObservationTensor;
use crate::rules::has_line;
use crate::types::{CellState, GameStatus, Player};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Complete, mutable state of one play.
///
/// Mutated only through [`apply_move`](Self::apply_move) and
/// [`undo_move`](Self::undo_move), which are exact inverses of each other.
/// Both check every precondition before writing anything, so a rejected
/// call leaves the state bit-identical. `Clone` produces a fully
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    /// Player whose mark the next move places. Keeps alternating after the
    /// game ends; [`current_player`](Self::current_player) hides it then.
    pub(crate) current_player: Player,
    pub(crate) num_moves: usize,
    /// Set by the move that completes a line, cleared by its undo.
    pub(crate) outcome: Option<Player>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(&config),
            config,
            current_player: Player::X,
            num_moves: 0,
            outcome: None,
            history: Vec::with_capacity(config.num_cells()),
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Mutation
    // ─────────────────────────────────────────────────────────

    /// Places the current player's mark on `cell`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`], [`MoveError::OutOfRange`] or
    /// [`MoveError::CellOccupied`]; the state is unchanged in every case.
    #[instrument(skip(self), fields(player = %self.current_player, num_moves = self.num_moves))]
    pub fn apply_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let action = Move::new(self.current_player, cell);
        ApplyContract::pre(self, &action).inspect_err(|e| warn!(error = %e, "Rejected move"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = action.player;
        self.board.set(cell, mover.mark());
        self.history.push(action);

        // Only the mover can have completed a line with this mark.
        if has_line(&self.board, &self.config, mover) {
            self.outcome = Some(mover);
            debug!(winner = %mover, "Line completed");
        }

        self.current_player = mover.opponent();
        self.num_moves += 1;

        #[cfg(debug_assertions)]
        assert_post::<ApplyContract>(&before, self);

        debug!(status = %self.status(), "Move applied");
        Ok(())
    }

    /// Reverts the most recent move, which must be `player` marking `cell`.
    ///
    /// Afterwards `player` is to move again and any outcome is cleared.
    ///
    /// # Errors
    ///
    /// [`MoveError::NothingToUndo`] or [`MoveError::UndoMismatch`]; the state
    /// is unchanged in every case.
    #[instrument(skip(self), fields(num_moves = self.num_moves))]
    pub fn undo_move(&mut self, player: Player, cell: usize) -> Result<(), MoveError> {
        let action = Move::new(player, cell);
        UndoContract::pre(self, &action).inspect_err(|e| warn!(error = %e, "Rejected undo"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(cell, CellState::Empty);
        self.current_player = player;
        self.outcome = None;
        self.num_moves -= 1;
        self.history.pop();

        #[cfg(debug_assertions)]
        assert_post::<UndoContract>(&before, self);

        debug!("Move undone");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Empty cells in ascending order, or nothing once terminal.
    #[instrument(skip(self))]
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// True once a line is completed or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some() || self.is_full()
    }

    /// True when every cell is marked.
    pub fn is_full(&self) -> bool {
        self.num_moves == self.config.num_cells()
    }

    /// Player to move, or `None` once terminal.
    pub fn current_player(&self) -> Option<Player> {
        (!self.is_terminal()).then_some(self.current_player)
    }

    /// Winner recorded by the line-completing move, if any.
    pub fn outcome(&self) -> Option<Player> {
        self.outcome
    }

    /// In progress, won or drawn.
    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(winner) => GameStatus::Won(winner),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Zero-sum rewards indexed by player id.
    ///
    /// Recomputed from the board rather than read from `outcome`, so it can
    /// be checked independently. Non-terminal states score as a draw.
    #[instrument(skip(self))]
    pub fn returns(&self) -> [f64; Player::COUNT] {
        if has_line(&self.board, &self.config, Player::X) {
            [1.0, -1.0]
        } else if has_line(&self.board, &self.config, Player::O) {
            [-1.0, 1.0]
        } else {
            [0.0, 0.0]
        }
    }

    /// Reward for a single player.
    pub fn player_return(&self, player: Player) -> f64 {
        self.returns()[player.id()]
    }

    /// Number of marks placed.
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration this state was built for.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────
    //  Encodings
    // ─────────────────────────────────────────────────────────

    /// Board as text: `.`, `x`, `o` per cell, rows joined by newlines.
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// Cell history as `"0, 4, 1"`.
    ///
    /// The game has no hidden information, so every player gets the same
    /// string.
    pub fn information_state_string(&self, _player: Player) -> String {
        self.history
            .iter()
            .map(|m| m.cell.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rendered board, identical for every player.
    pub fn observation_string(&self, _player: Player) -> String {
        self.render()
    }

    /// One-hot encoding of the board, identical for every player.
    #[instrument(skip(self))]
    pub fn observation_tensor(&self, _player: Player) -> ObservationTensor {
        ObservationTensor::encode(&self.board)
    }

    /// Formats an action as `<mark>(<row>,<col>)`.
    pub fn action_to_string(&self, player: Player, action: usize) -> String {
        action_to_string(&self.config, player, action)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Panics if a transition broke a postcondition. Only reachable through a
/// bug in this crate, never through caller input.
#[cfg(debug_assertions)]
fn assert_post<C: Contract<GameState, Move>>(before: &GameState, after: &GameState) {
    if let Err(e) = C::post(before, after) {
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(config: GameConfig, cells: &[usize]) -> GameState {
        let mut game = GameState::new(config);
        for &cell in cells {
            game.apply_move(cell).unwrap();
        }
        game
    }

    #[test]
    fn test_initial_state() {
        let game = GameState::new(GameConfig::classic());
        assert_eq!(game.current_player(), Some(Player::X));
        assert_eq!(game.num_moves(), 0);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_terminal());
        assert_eq!(game.legal_actions(), (0..9).collect::<Vec<_>>());
        assert_eq!(game.render(), "...\n...\n...");
    }

    #[test]
    fn test_top_row_win() {
        let game = play(GameConfig::classic(), &[0, 4, 1, 5, 2]);
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Some(Player::X));
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.returns(), [1.0, -1.0]);
        assert_eq!(game.render(), "xxx\n.oo\n...");
        assert_eq!(game.current_player(), None);
        assert!(game.legal_actions().is_empty());
    }

    #[test]
    fn test_o_wins() {
        let game = play(GameConfig::classic(), &[0, 3, 1, 4, 8, 5]);
        assert_eq!(game.outcome(), Some(Player::O));
        assert_eq!(game.returns(), [-1.0, 1.0]);
        assert_eq!(game.player_return(Player::O), 1.0);
    }

    #[test]
    fn test_full_board_draw() {
        let game = play(GameConfig::classic(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(game.is_terminal());
        assert!(game.is_full());
        assert!(crate::rules::is_full(game.board()));
        assert_eq!(game.outcome(), None);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.returns(), [0.0, 0.0]);
    }

    #[test]
    fn test_legal_actions_exclude_occupied() {
        let game = play(GameConfig::classic(), &[0, 4]);
        assert_eq!(game.legal_actions(), vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(game.current_player(), Some(Player::X));
    }

    #[test]
    fn test_rejected_moves_leave_state_untouched() {
        let mut game = play(GameConfig::classic(), &[4]);
        let snapshot = game.clone();

        assert_eq!(game.apply_move(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(
            game.apply_move(42),
            Err(MoveError::OutOfRange {
                cell: 42,
                num_cells: 9
            })
        );
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_move_after_terminal_rejected() {
        let mut game = play(GameConfig::classic(), &[0, 4, 1, 5, 2]);
        let snapshot = game.clone();
        assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_undo_restores_exactly() {
        let mut game = play(GameConfig::classic(), &[0, 4]);
        let snapshot = game.clone();

        game.apply_move(8).unwrap();
        game.undo_move(Player::X, 8).unwrap();
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_undo_terminal_move_reopens_game() {
        let mut game = play(GameConfig::classic(), &[0, 4, 1, 5, 2]);
        game.undo_move(Player::X, 2).unwrap();

        assert!(!game.is_terminal());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.current_player(), Some(Player::X));
        assert_eq!(game.num_moves(), 4);
        assert_eq!(game.render(), "xx.\n.oo\n...");
    }

    #[test]
    fn test_bad_undo_leaves_state_untouched() {
        let mut game = GameState::new(GameConfig::classic());
        assert_eq!(game.undo_move(Player::X, 0), Err(MoveError::NothingToUndo));

        game.apply_move(0).unwrap();
        let snapshot = game.clone();
        assert!(game.undo_move(Player::X, 1).is_err());
        assert!(game.undo_move(Player::O, 0).is_err());
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_strings() {
        let game = play(GameConfig::classic(), &[0, 4, 1]);
        assert_eq!(game.information_state_string(Player::X), "0, 4, 1");
        assert_eq!(
            game.information_state_string(Player::O),
            game.information_state_string(Player::X)
        );
        assert_eq!(game.observation_string(Player::O), "xx.\n.o.\n...");
        assert_eq!(game.to_string(), game.render());
        assert_eq!(game.action_to_string(Player::X, 2), "x(0,2)");
    }

    #[test]
    fn test_empty_information_state() {
        let game = GameState::new(GameConfig::classic());
        assert_eq!(game.information_state_string(Player::X), "");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = play(GameConfig::classic(), &[0]);
        let copy = original.clone();
        original.apply_move(4).unwrap();

        assert_eq!(copy.num_moves(), 1);
        assert_eq!(copy.board().get(4), Some(CellState::Empty));
        assert_eq!(original.num_moves(), 2);
    }

    #[test]
    fn test_win_length_one_ends_on_first_move() {
        let game = play(GameConfig::new(3, 3, 1).unwrap(), &[7]);
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Some(Player::X));
    }

    #[test]
    fn test_rectangular_board_horizontal_win() {
        // 2x5, K=4: X takes 0..4 on the top row.
        let game = play(GameConfig::new(2, 5, 4).unwrap(), &[0, 5, 1, 6, 2, 9, 3]);
        assert_eq!(game.outcome(), Some(Player::X));
        assert_eq!(game.render(), "xxxx.\noo..o");
    }
}
