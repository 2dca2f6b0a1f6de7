//! Marker assignment for moves committed in a live game.
//!
//! This is separate from [`crate::DepthParity`], which only decides the
//! markers of hypothetical placements inside the search. The two rules do
//! not agree in general and are kept apart on purpose.

use super::Player;
use tracing::instrument;

/// Assigns live-game markers from board-size and remaining-square parity.
///
/// On an odd-sized board the computer plays X when an even number of
/// squares remain and O otherwise; on an even-sized board the rule flips.
/// The human always plays O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardParityTurns;

impl BoardParityTurns {
    /// Marker for the computer's next committed move.
    #[instrument(level = "debug")]
    pub fn computer_marker(&self, size: usize, remaining: usize) -> Player {
        let even_remaining = remaining % 2 == 0;
        match (size % 2 == 1, even_remaining) {
            (true, true) | (false, false) => Player::X,
            (true, false) | (false, true) => Player::O,
        }
    }

    /// Marker for the human's moves.
    pub fn human_marker(&self) -> Player {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_board() {
        let turns = BoardParityTurns;
        assert_eq!(turns.computer_marker(3, 9), Player::O);
        assert_eq!(turns.computer_marker(3, 8), Player::X);
    }

    #[test]
    fn test_even_board() {
        let turns = BoardParityTurns;
        assert_eq!(turns.computer_marker(4, 16), Player::O);
        assert_eq!(turns.computer_marker(4, 15), Player::X);
    }

    #[test]
    fn test_human_plays_o() {
        assert_eq!(BoardParityTurns.human_marker(), Player::O);
    }

    #[test]
    fn test_computer_answers_human_with_x() {
        // Human opens as O, leaving size² - 1 squares for the computer.
        let turns = BoardParityTurns;
        for size in 1..=6 {
            assert_eq!(turns.computer_marker(size, size * size - 1), Player::X, "size {size}");
        }
    }
}
