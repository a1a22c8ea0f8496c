//! Win detection for arbitrary board sizes and line lengths.

use crate::board::Board;
use crate::config::GameConfig;
use crate::types::Player;
use std::ops::Range;
use tracing::instrument;

/// Row/column steps of the four line directions: horizontal, vertical,
/// down-right diagonal and down-left anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether `player` has `win_length` consecutive marks in any
/// direction.
///
/// Scans the whole board; it does not rely on knowing the last move.
///
/// # Panics
///
/// Panics if the board was not built for `config`.
#[instrument(
    skip(board, config),
    fields(rows = config.rows(), cols = config.cols(), k = config.win_length())
)]
pub fn has_line(board: &Board, config: &GameConfig, player: Player) -> bool {
    assert_eq!(
        board.num_cells(),
        config.num_cells(),
        "board length does not match its configuration"
    );
    let k = config.win_length();

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let rows = start_range(config.rows(), dr, k);
        let cols = start_range(config.cols(), dc, k);
        rows.flat_map(|row| cols.clone().map(move |col| (row, col)))
            .any(|(row, col)| run_matches(board, player, row, col, (dr, dc), k))
    })
}

/// Returns the first player (X before O) holding a line.
#[instrument(skip(board, config))]
pub fn check_winner(board: &Board, config: &GameConfig) -> Option<Player> {
    Player::all().find(|player| has_line(board, config, *player))
}

/// Start coordinates along one axis from which a run of `k` cells with the
/// given step stays in `0..len`. Empty when the run cannot fit.
fn start_range(len: usize, step: isize, k: usize) -> Range<usize> {
    match step {
        0 => 0..len,
        s if s > 0 => 0..(len + 1).saturating_sub(k),
        _ => (k - 1).min(len)..len,
    }
}

fn run_matches(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    k: usize,
) -> bool {
    let mark = player.mark();
    (0..k as isize).all(|i| {
        let r = row.checked_add_signed(dr * i);
        let c = col.checked_add_signed(dc * i);
        matches!((r, c), (Some(r), Some(c)) if board.at(r, c) == mark)
    })
}
