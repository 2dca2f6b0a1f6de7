//! Human player reading coordinates from the console.

use super::Participant;
use crate::console::Console;
use anyhow::Result;
use gridtac::{Board, BoardParityTurns, Move, Player, Position};
use tracing::{debug, instrument};

/// Human player typing a row and a column.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    marker: Player,
}

impl HumanPlayer {
    /// Creates a human player with the live-game human marker.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: BoardParityTurns.human_marker(),
        }
    }

    fn ask_coordinate(
        console: &mut dyn Console,
        axis: &str,
        size: usize,
    ) -> Result<Option<usize>> {
        let last = size - 1;
        let answer = console.ask(&format!("Enter the {axis} (0 to {last}): "))?;
        match answer.parse::<usize>() {
            Ok(value) if value < size => Ok(Some(value)),
            _ => {
                console.say(&format!("Please enter a number from 0 to {last}."))?;
                Ok(None)
            }
        }
    }
}

impl Participant for HumanPlayer {
    #[instrument(skip(self, board, console), fields(player = %self.name))]
    fn choose(&mut self, board: &Board, console: &mut dyn Console) -> Result<Move> {
        let size = board.size();
        loop {
            let Some(row) = Self::ask_coordinate(console, "row", size)? else {
                continue;
            };
            let Some(col) = Self::ask_coordinate(console, "column", size)? else {
                continue;
            };

            let position = Position::new(row, col);
            if board.is_empty(position) {
                debug!(%position, "Human chose position");
                return Ok(Move::new(self.marker, position));
            }
            console.say("Cell already occupied. Try again.")?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn victory_message(&self, _marker: Player) -> String {
        "You win!".to_string()
    }
}
