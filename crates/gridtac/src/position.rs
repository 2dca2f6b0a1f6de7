//! Cell coordinates and move enumeration.

use super::types::Board;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` coordinate on a square board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, new,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Converts position to a row-major board index.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Creates position from a row-major board index.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new(index / size, index % size))
    }

    /// Whether this position is one of the four corners of a `size` board.
    pub fn is_corner(self, size: usize) -> bool {
        let last = size.saturating_sub(1);
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// Whether this position is the center square of an odd-sized board.
    pub fn is_center(self, size: usize) -> bool {
        size % 2 == 1 && self.row == size / 2 && self.col == size / 2
    }

    /// All empty squares, row ascending then column ascending.
    ///
    /// The order decides tie-breaking in the search and in move selection.
    #[instrument(level = "trace", skip(board), fields(size = board.size()))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        let size = board.size();
        (0..size * size)
            .filter_map(|index| Self::from_index(index, size))
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}
