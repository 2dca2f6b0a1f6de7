//! Error types for board construction, move placement and configuration.

use super::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when a checked placement cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("Position {} is outside the {}x{} board", _0, _1, _1)]
    OutOfBounds(Position, usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Error raised when a board cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// No rows were given.
    #[display("Board has no rows")]
    Empty,

    /// A row length differs from the number of rows.
    #[display("Row {row} has {len} cells but the board has {rows} rows")]
    NotSquare {
        /// Number of rows parsed.
        rows: usize,
        /// Offending row index.
        row: usize,
        /// Number of cells in that row.
        len: usize,
    },

    /// A cell character is not one of `X`, `O`, `.` or `_`.
    #[display("Invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// The rejected character.
        ch: char,
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
    },
}

impl std::error::Error for BoardError {}

/// What went wrong while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Difficulty outside `easy` / `hard`.
    #[display("unknown difficulty {_0:?} (use 'easy' or 'hard')")]
    UnknownDifficulty(String),

    /// Game mode outside `1` / `2`.
    #[display("unknown game mode {_0:?} (use '1' or '2')")]
    UnknownMode(String),

    /// Board size that cannot hold a game.
    #[display("invalid board size {_0} (must be at least 1)")]
    InvalidSize(usize),

    /// Configuration file could not be read.
    #[display("failed to read config file: {_0}")]
    Read(String),

    /// Configuration file could not be parsed.
    #[display("failed to parse config: {_0}")]
    Parse(String),
}

/// Configuration error with caller location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_names_kind() {
        let err = ConfigError::new(ConfigErrorKind::UnknownDifficulty("medium".to_string()));
        let text = err.to_string();
        assert!(text.starts_with("Config error: unknown difficulty \"medium\""));
        assert!(text.contains("error.rs"));
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds(Position::new(3, 0), 3);
        assert_eq!(err.to_string(), "Position (3, 0) is outside the 3x3 board");
    }
}
