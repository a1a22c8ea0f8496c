//! One-hot observation tensor.

use crate::board::Board;
use crate::types::CellState;
use serde::{Deserialize, Serialize};

/// Dense `[channel, row, col]` tensor with one channel per [`CellState`].
///
/// Flattened, channel `c` of cell `i` lives at `c * num_cells + i`. Exactly
/// one channel is `1.0` for every cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationTensor {
    shape: [usize; 3],
    values: Vec<f32>,
}

impl ObservationTensor {
    /// Encodes a board.
    pub fn encode(board: &Board) -> Self {
        let num_cells = board.num_cells();
        let mut values = vec![0.0; CellState::COUNT * num_cells];
        for (cell, state) in board.cells().iter().enumerate() {
            values[state.channel() * num_cells + cell] = 1.0;
        }
        Self {
            shape: [CellState::COUNT, board.rows(), board.cols()],
            values,
        }
    }

    /// `[channels, rows, cols]`.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Flat values in channel-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Consumes the tensor, returning its flat values.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Value of `channel` at row-major `cell`.
    pub fn get(&self, channel: usize, cell: usize) -> Option<f32> {
        let num_cells = self.shape[1] * self.shape[2];
        if channel >= self.shape[0] || cell >= num_cells {
            return None;
        }
        self.values.get(channel * num_cells + cell).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, GameState};

    #[test]
    fn test_empty_board_is_all_empty_channel() {
        let board = Board::new(&GameConfig::classic());
        let tensor = ObservationTensor::encode(&board);
        assert_eq!(tensor.shape(), [3, 3, 3]);
        assert_eq!(tensor.values().len(), 27);
        assert!(tensor.values()[..9].iter().all(|v| *v == 1.0));
        assert!(tensor.values()[9..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_marks_land_in_their_channels() {
        let mut game = GameState::new(GameConfig::classic());
        game.apply_move(0).unwrap();
        game.apply_move(4).unwrap();

        let tensor = ObservationTensor::encode(game.board());
        let cross = CellState::Cross.channel();
        let nought = CellState::Nought.channel();
        let empty = CellState::Empty.channel();

        assert_eq!(tensor.get(cross, 0), Some(1.0));
        assert_eq!(tensor.get(empty, 0), Some(0.0));
        assert_eq!(tensor.get(nought, 4), Some(1.0));
        assert_eq!(tensor.get(empty, 4), Some(0.0));
        assert_eq!(tensor.get(empty, 8), Some(1.0));
        assert_eq!(tensor.get(3, 0), None);
        assert_eq!(tensor.get(0, 9), None);
    }

    #[test]
    fn test_exactly_one_hot_per_cell() {
        let mut game = GameState::new(GameConfig::new(3, 4, 3).unwrap());
        for cell in [0, 5, 11, 2] {
            game.apply_move(cell).unwrap();
        }
        let tensor = ObservationTensor::encode(game.board());
        assert_eq!(tensor.shape(), [3, 3, 4]);
        for cell in 0..12 {
            let sum: f32 = (0..3).filter_map(|c| tensor.get(c, cell)).sum();
            assert_eq!(sum, 1.0);
        }
    }
}
