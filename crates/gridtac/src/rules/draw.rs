//! Draw detection logic.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OOX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_four_by_four_draw() {
        let board: Board = "XOXO/XOXO/OXOX/OXOX".parse().unwrap();
        assert!(is_draw(&board));
    }
}
