//! Participant trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use gridtac::{Board, Move, Player};

/// Anyone who can take a turn at the board.
pub trait Participant {
    /// Picks the next move for the current board.
    ///
    /// The returned move targets an empty square of `board`.
    fn choose(&mut self, board: &Board, console: &mut dyn Console) -> Result<Move>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// Line printed after this participant's move has been placed.
    fn announce(&self, _mv: &Move) -> Option<String> {
        None
    }

    /// Line printed when this participant's move completed a line of `marker`.
    fn victory_message(&self, marker: Player) -> String;
}
