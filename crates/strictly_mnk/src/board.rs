//! Fixed-size row-major grid of cell states.

use crate::config::{ConfigError, GameConfig};
use crate::types::CellState;
use serde::Serialize;

/// m x n board.
///
/// The cell buffer is sized once from the [`GameConfig`] and never grows
/// or shrinks afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Cells in row-major order.
    cells: Box<[CellState]>,
}

impl Board {
    /// Creates a new empty board for the given configuration.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rows: config.rows(),
            cols: config.cols(),
            cells: vec![CellState::Empty; config.num_cells()].into_boxed_slice(),
        }
    }

    /// Builds a board from explicit cell contents.
    ///
    /// The cells are taken as-is; no turn or line rules are applied.
    pub fn from_cells(
        config: &GameConfig,
        cells: impl Into<Vec<CellState>>,
    ) -> Result<Self, ConfigError> {
        let cells = cells.into();
        if cells.len() != config.num_cells() {
            return Err(ConfigError::new(format!(
                "Board has {} cells but a {}x{} configuration needs {}",
                cells.len(),
                config.rows(),
                config.cols(),
                config.num_cells()
            )));
        }
        Ok(Self {
            rows: config.rows(),
            cols: config.cols(),
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, pos: usize) -> Option<CellState> {
        self.cells.get(pos).copied()
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn at(&self, row: usize, col: usize) -> CellState {
        assert!(row < self.rows && col < self.cols, "({row},{col}) off board");
        self.cells[row * self.cols + col]
    }

    /// Checks if a cell is in range and empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(CellState::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != CellState::Empty).count()
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == CellState::Empty)
            .map(|(idx, _)| idx)
    }

    /// Overwrites a cell. Callers check bounds and occupancy first.
    pub(crate) fn set(&mut self, pos: usize, cell: CellState) {
        self.cells[pos] = cell;
    }

    /// Formats the board as one glyph per cell, one line per row.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.rows * (self.cols + 1));
        for (row, chunk) in self.cells.chunks(self.cols).enumerate() {
            result.extend(chunk.iter().map(|c| c.glyph()));
            if row + 1 < self.rows {
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
