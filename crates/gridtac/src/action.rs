//! Moves committed to a live board.

use super::error::MoveError;
use super::{Board, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their marker.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} played at {}", self.player, self.position)
    }
}

impl Board {
    /// Applies a move, rejecting out-of-range and occupied positions.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        self.place(mv.position, mv.player)
    }
}
