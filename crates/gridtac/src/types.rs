//! Core domain types for N×N tic-tac-toe.

use super::error::{BoardError, MoveError};
use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar evaluation of a position: +1 X wins, 0 draw, -1 O wins.
pub type Score = i32;

/// Player marker.
///
/// X is the maximizing side of the search, O the minimizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Marker X, scored +1 when it completes a line.
    #[display("X")]
    X,
    /// Marker O, scored -1 when it completes a line.
    #[display("O")]
    O,
}

impl Player {
    /// Score of a position this player has won.
    pub fn score(self) -> Score {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Square {
    /// Empty square.
    #[display(" ")]
    Empty,
    /// Square occupied by a player.
    #[display("{_0}")]
    Occupied(Player),
}

impl Square {
    /// Parses a board-text character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }

    /// Board-text character for this square.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Square `size × size` board stored in row-major order.
///
/// The board is expected to be at least 1×1; sizing is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if self.contains(pos) {
            self.squares.get(pos.to_index(self.size)).copied()
        } else {
            None
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds(pos, self.size));
        }
        let index = pos.to_index(self.size);
        self.squares[index] = square;
        Ok(())
    }

    /// Places a marker on an empty square.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds(pos, self.size));
        }
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player))
    }

    /// Unchecked placement used by the search's apply/undo cycle.
    pub(crate) fn put(&mut self, pos: Position, player: Player) {
        let index = pos.to_index(self.size);
        self.squares[index] = Square::Occupied(player);
    }

    /// Undoes a [`Board::put`].
    pub(crate) fn clear(&mut self, pos: Position) {
        let index = pos.to_index(self.size);
        self.squares[index] = Square::Empty;
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.max(1))
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Compact text form, rows joined by `/`, e.g. `XX./OO./...`.
    pub fn encode(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|s| s.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat((4 * self.size).saturating_sub(1));
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|s| s.to_string()).collect();
            writeln!(f, "{}", cells.join(" | "))?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses rows separated by `/` or newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardError::Empty);
        }

        let size = rows.len();
        let mut squares = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(BoardError::NotSquare {
                    rows: size,
                    row,
                    len,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let square = Square::from_char(ch).ok_or(BoardError::InvalidCell { ch, row, col })?;
                squares.push(square);
            }
        }

        Ok(Self { size, squares })
    }
}

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// No line complete and at least one empty square.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// Board full without a complete line.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Score of a terminal status, `None` while in progress.
    pub fn score(self) -> Option<Score> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player.score()),
            GameStatus::Draw => Some(0),
        }
    }
}
