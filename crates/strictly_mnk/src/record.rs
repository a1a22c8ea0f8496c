//! Serializable record of a play.
//!
//! Persistence belongs to the host; this is the form the engine hands it.

use crate::action::{Move, MoveError};
use crate::config::GameConfig;
use crate::state::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Configuration plus the moves played, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board configuration.
    config: GameConfig,
    /// Moves in play order.
    moves: Vec<Move>,
}

impl GameRecord {
    /// Creates a record from parts. Nothing is validated until [`replay`](Self::replay).
    pub fn new(config: GameConfig, moves: Vec<Move>) -> Self {
        Self { config, moves }
    }

    /// Snapshots a state's configuration and history.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            config: *state.config(),
            moves: state.history().to_vec(),
        }
    }

    /// Rebuilds the state by applying every move in order.
    ///
    /// # Errors
    ///
    /// The first move that is illegal at its point in the replay, including
    /// one recorded for the wrong player.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self) -> Result<GameState, MoveError> {
        let mut state = GameState::new(self.config);
        for (ply, mov) in self.moves.iter().enumerate() {
            if let Some(expected) = state.current_player()
                && expected != mov.player
            {
                warn!(ply, %mov, "Recorded move out of turn");
                return Err(MoveError::WrongPlayer(mov.player));
            }
            state.apply_move(mov.cell)?;
        }
        debug!(status = %state.status(), "Replay complete");
        Ok(state)
    }

    /// Serializes to JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes from JSON. The configuration is validated; moves are not.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&GameState> for GameRecord {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}

/// Error reading or writing a [`GameRecord`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RecordError {
    /// Malformed JSON or an invalid configuration.
    #[display("Record JSON error: {}", _0)]
    Json(serde_json::Error),
}
