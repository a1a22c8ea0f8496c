//! Strictly MNK - a reversible m,n,k-game rules engine
//!
//! Tic-tac-toe generalized to any `rows x cols` board and any win-line
//! length `k`, built for hosts that drive games programmatically: search,
//! self-play and learning agents.
//!
//! # Architecture
//!
//! - **Board & rules**: fixed-size row-major [`Board`] plus pure win and
//!   draw predicates in [`rules`]
//! - **State machine**: [`GameState`] with contract-checked
//!   [`apply_move`](GameState::apply_move) / [`undo_move`](GameState::undo_move)
//! - **Descriptor**: [`Game`] exposes action and observation space sizes
//! - **Encodings**: text rendering, history strings and the one-hot
//!   [`ObservationTensor`]
//! - **Persistence**: [`GameRecord`] for hosts that store plays
//!
//! # Example
//!
//! ```
//! use strictly_mnk::{Game, Player};
//!
//! # fn example() -> Result<(), strictly_mnk::MoveError> {
//! let game = Game::classic();
//! let mut state = game.new_initial_state();
//! for cell in [0, 4, 1, 5, 2] {
//!     state.apply_move(cell)?;
//! }
//! assert!(state.is_terminal());
//! assert_eq!(state.outcome(), Some(Player::X));
//! assert_eq!(state.render(), "xxx\n.oo\n...");
//!
//! state.undo_move(Player::X, 2)?;
//! assert!(!state.is_terminal());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod game;
mod observation;
mod record;
mod state;
mod types;

// Public module declarations
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{CellState, GameStatus, Player};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Board and actions
pub use action::{Move, MoveError, action_to_string};
pub use board::Board;

// Crate-level exports - State machine
pub use game::Game;
pub use observation::ObservationTensor;
pub use state::GameState;

// Crate-level exports - Persistence
pub use record::{GameRecord, RecordError};

// Crate-level exports - Invariants
pub use invariants::{Invariant, InvariantSet, InvariantViolation, MnkInvariants};
