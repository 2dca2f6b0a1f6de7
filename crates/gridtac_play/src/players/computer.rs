//! Computer player backed by the alpha-beta move selector.

use super::Participant;
use crate::console::Console;
use anyhow::{Result, anyhow};
use gridtac::{Board, BoardParityTurns, Difficulty, Move, MoveSelector, Player, SearchLimits};
use tracing::{debug, instrument};

/// Computer player choosing squares with [`MoveSelector`].
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    selector: MoveSelector,
    turns: BoardParityTurns,
    both_sides: bool,
}

impl ComputerPlayer {
    /// Creates a computer opponent for a human.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, limits: SearchLimits) -> Self {
        Self {
            name: name.into(),
            difficulty,
            selector: MoveSelector::new(limits),
            turns: BoardParityTurns,
            both_sides: false,
        }
    }

    /// Marks this player as taking every turn, naming winners by marker.
    pub fn playing_both_sides(mut self) -> Self {
        self.both_sides = true;
        self
    }
}

impl Participant for ComputerPlayer {
    #[instrument(skip(self, board, console), fields(player = %self.name, difficulty = %self.difficulty))]
    fn choose(&mut self, board: &Board, console: &mut dyn Console) -> Result<Move> {
        console.say("Computer's turn:")?;

        let size = board.size();
        let remaining = board.empty_count();
        let mut scratch = board.clone();
        let selection = self
            .selector
            .select(&mut scratch, self.difficulty, remaining, size);
        let position = selection
            .position()
            .ok_or_else(|| anyhow!("No empty square left for {}", self.name))?;

        let marker = self.turns.computer_marker(size, remaining);
        debug!(%position, %marker, score = ?selection.score(), "Computer chose position");
        Ok(Move::new(marker, position))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn announce(&self, mv: &Move) -> Option<String> {
        Some(mv.to_string())
    }

    fn victory_message(&self, marker: Player) -> String {
        match (self.both_sides, marker) {
            (false, _) => "Computer wins!".to_string(),
            (true, Player::X) => "Computer 1 wins!".to_string(),
            (true, Player::O) => "Computer 2 wins!".to_string(),
        }
    }
}
