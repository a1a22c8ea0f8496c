//! Board dimensions and win-line length.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Immutable parameters of an m,n,k-game.
///
/// Construction always validates `rows >= 1`, `cols >= 1` and
/// `1 <= win_length <= max(rows, cols)`, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

/// Unvalidated config as it appears in a TOML or JSON document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGameConfig {
    #[serde(default = "default_dimension")]
    rows: usize,
    #[serde(default = "default_dimension")]
    cols: usize,
    #[serde(default = "default_dimension")]
    win_length: usize,
}

fn default_dimension() -> usize {
    GameConfig::CLASSIC_SIZE
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.rows, raw.cols, raw.win_length)
    }
}

impl GameConfig {
    /// Side length and win length of classic tic-tac-toe.
    pub const CLASSIC_SIZE: usize = 3;

    /// Creates a validated configuration.
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::new(format!(
                "Board dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        let longest = rows.max(cols);
        if win_length == 0 || win_length > longest {
            return Err(ConfigError::new(format!(
                "Win length {} outside [1, {}] for a {}x{} board",
                win_length, longest, rows, cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            win_length,
        })
    }

    /// The 3x3, three-in-a-row configuration.
    pub const fn classic() -> Self {
        Self {
            rows: Self::CLASSIC_SIZE,
            cols: Self::CLASSIC_SIZE,
            win_length: Self::CLASSIC_SIZE,
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// Missing keys default to the classic value of 3.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed game config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            win_length = config.win_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Number of board rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of board columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Marks in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells, which is also the number of distinct actions.
    pub fn num_cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Maps `(row, col)` to a row-major cell index.
    pub fn row_major_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "({row},{col}) off board");
        row * self.cols + col
    }

    /// Maps a row-major cell index back to `(row, col)`.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_classic_config() {
        let config = GameConfig::classic();
        assert_eq!(config.num_cells(), 9);
        assert_eq!(config, GameConfig::default());
        assert_eq!(GameConfig::new(3, 3, 3), Ok(config));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(GameConfig::new(0, 3, 1).is_err());
        assert!(GameConfig::new(3, 0, 1).is_err());
    }

    #[test]
    fn test_win_length_bounds() {
        assert!(GameConfig::new(3, 3, 0).is_err());
        assert!(GameConfig::new(3, 3, 4).is_err());
        // K may exceed one side as long as it fits along the other.
        assert!(GameConfig::new(2, 5, 5).is_ok());
        assert!(GameConfig::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_error_carries_message() {
        let err = GameConfig::new(3, 3, 7).unwrap_err();
        assert!(err.message.contains("Win length 7"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_row_major_round_trip() {
        let config = GameConfig::new(4, 5, 3).unwrap();
        for row in 0..4 {
            for col in 0..5 {
                let idx = config.row_major_index(row, col);
                assert_eq!(config.coords(idx), (row, col));
            }
        }
        assert_eq!(config.row_major_index(1, 2), 7);
    }

    #[test]
    fn test_toml_defaults_and_overrides() {
        let config = GameConfig::from_toml_str("rows = 5\ncols = 5\nwin_length = 4\n").unwrap();
        assert_eq!((config.rows(), config.cols(), config.win_length()), (5, 5, 4));

        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::classic());
    }

    #[test]
    fn test_toml_validation_applies() {
        assert!(GameConfig::from_toml_str("rows = 3\ncols = 3\nwin_length = 9\n").is_err());
        assert!(GameConfig::from_toml_str("rows = 3\nplayers = 4\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 6").unwrap();
        writeln!(file, "cols = 7").unwrap();
        writeln!(file, "win_length = 4").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config, GameConfig::new(6, 7, 4).unwrap());
    }

    #[test]
    fn test_from_missing_file() {
        let err = GameConfig::from_file("/nonexistent/mnk.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
