//! Shared helpers for integration tests.

use strictly_mnk::{GameConfig, GameState};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; `RUST_LOG` overrides the default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Plays `cells` in order from an empty board, panicking on an illegal move.
pub fn play(config: GameConfig, cells: &[usize]) -> GameState {
    let mut state = GameState::new(config);
    for &cell in cells {
        state
            .apply_move(cell)
            .unwrap_or_else(|e| panic!("move {cell} rejected: {e}"));
    }
    state
}
