//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the search calls [`evaluate`] at every
//! node, so nothing here allocates or mutates.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::{Board, GameStatus};
use tracing::instrument;

/// Reports the terminal status of a board.
///
/// A complete line wins; otherwise a full board is a draw; otherwise the
/// game is still in progress.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Whether the game on this board is over.
pub fn is_terminal(board: &Board) -> bool {
    evaluate(board).is_terminal()
}
