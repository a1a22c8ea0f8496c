//! Immutable game descriptor.

use crate::action::action_to_string;
use crate::config::{ConfigError, GameConfig};
use crate::state::GameState;
use crate::types::{CellState, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// m,n,k-game rules engine for one configuration.
///
/// A host queries this for the shape of the action and observation spaces
/// and creates fresh [`GameState`]s from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
}

impl Game {
    /// Creates a game for a validated configuration.
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Validates dimensions and creates a game.
    #[instrument]
    pub fn with_dimensions(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(GameConfig::new(rows, cols, win_length)?))
    }

    /// Classic 3x3 tic-tac-toe.
    pub const fn classic() -> Self {
        Self {
            config: GameConfig::classic(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state: empty board, X to move.
    #[instrument(skip(self))]
    pub fn new_initial_state(&self) -> GameState {
        debug!(
            rows = self.config.rows(),
            cols = self.config.cols(),
            win_length = self.config.win_length(),
            "Creating initial state"
        );
        GameState::new(self.config)
    }

    /// One action per cell.
    pub fn num_distinct_actions(&self) -> usize {
        self.config.num_cells()
    }

    /// Every cell can be marked at most once.
    pub fn max_game_length(&self) -> usize {
        self.config.num_cells()
    }

    /// Always two.
    pub fn num_players(&self) -> usize {
        Player::COUNT
    }

    /// Return of the losing player.
    pub fn min_utility(&self) -> f64 {
        -1.0
    }

    /// Return of the winning player.
    pub fn max_utility(&self) -> f64 {
        1.0
    }

    /// Returns always sum to zero.
    pub fn utility_sum(&self) -> f64 {
        0.0
    }

    /// `[cell states, rows, cols]`.
    pub fn observation_tensor_shape(&self) -> [usize; 3] {
        [CellState::COUNT, self.config.rows(), self.config.cols()]
    }

    /// Number of values in an observation tensor.
    pub fn observation_tensor_size(&self) -> usize {
        self.observation_tensor_shape().iter().product()
    }

    /// Formats an action as `<mark>(<row>,<col>)`.
    pub fn action_to_string(&self, player: Player, action: usize) -> String {
        action_to_string(&self.config, player, action)
    }
}

impl From<GameConfig> for Game {
    fn from(config: GameConfig) -> Self {
        Self::new(config)
    }
}
