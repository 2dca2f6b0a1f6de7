//! gridtac - game-tree search for N×N tic-tac-toe
//!
//! Evaluates square boards of any size, searches them with depth-limited
//! alpha-beta minimax and picks a square for an automated player.
//!
//! # Architecture
//!
//! - **Rules**: terminal status of a board ([`evaluate`], [`is_terminal`])
//! - **Moves**: empty squares in row-major order ([`Position::valid_moves`])
//! - **Search**: alpha-beta over hypothetical placements ([`Searcher`])
//! - **Selector**: difficulty-gated choice of the best square ([`MoveSelector`])
//! - **Turns**: live-game marker assignment ([`BoardParityTurns`])
//!
//! The board stays owned by the caller. Search and selection borrow it
//! mutably for one call and hand it back unchanged.
//!
//! # Example
//!
//! ```
//! use gridtac::{Board, Position, select};
//!
//! # fn example() -> Result<(), gridtac::ConfigError> {
//! let mut board: Board = "XX./OO./...".parse().expect("valid board");
//! let (remaining, size) = (board.empty_count(), board.size());
//! let choice: Option<Position> = select(&mut board, "easy", remaining, size)?;
//! assert!(matches!(choice, Some(pos) if board.is_empty(pos)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod position;
pub mod rules;
pub mod search;
mod selector;
mod turn;
mod types;

pub use action::Move;
pub use error::{BoardError, ConfigError, ConfigErrorKind, MoveError};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_draw, is_full, is_terminal};
pub use search::{
    DepthBudget, DepthParity, ExhaustedDepthPolicy, Neutral, PlacementRule, SCORE_CEILING,
    SCORE_FLOOR, SearchStats, Searcher,
};
pub use selector::{Difficulty, MoveSelector, SearchLimits, Selection, select};
pub use turn::BoardParityTurns;
pub use types::{Board, GameStatus, Player, Score, Square};
