//! Core domain types for m,n,k-games.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player X (id 0, goes first).
    X,
    /// Player O (id 1, goes second).
    O,
}

impl Player {
    /// Number of players in every m,n,k-game.
    pub const COUNT: usize = 2;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the numeric player id (0 for X, 1 for O).
    pub fn id(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Returns the cell state this player writes onto the board.
    pub fn mark(self) -> CellState {
        match self {
            Player::X => CellState::Cross,
            Player::O => CellState::Nought,
        }
    }

    /// Returns both players in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        Player::iter()
    }
}

impl TryFrom<usize> for Player {
    type Error = MoveError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Player::X),
            1 => Ok(Player::O),
            other => Err(MoveError::InvalidPlayer(other)),
        }
    }
}

/// State of a single board cell.
///
/// The discriminant doubles as the channel index of the observation tensor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    /// Unoccupied cell.
    #[default]
    Empty = 0,
    /// Cell marked by player O.
    Nought = 1,
    /// Cell marked by player X.
    Cross = 2,
}

impl CellState {
    /// Number of distinct cell states.
    pub const COUNT: usize = 3;

    /// Observation channel for this state.
    pub fn channel(self) -> usize {
        self as usize
    }

    /// Single-character glyph used when rendering boards.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Nought => 'o',
            CellState::Cross => 'x',
        }
    }

    /// Returns the player owning this mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Nought => Some(Player::O),
            CellState::Cross => Some(Player::X),
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves can be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
