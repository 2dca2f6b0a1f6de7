//! Match loop between participants.

use crate::config::{GameConfig, Mode};
use crate::console::Console;
use crate::players::{ComputerPlayer, HumanPlayer, Participant};
use anyhow::{Result, bail};
use gridtac::{Board, GameStatus, Player, evaluate, is_terminal};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// How a finished match ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// A participant completed a line.
    Won {
        /// Name of the participant who made the final move.
        winner: String,
        /// Marker on the completed line.
        marker: Player,
    },
    /// The board filled without a complete line.
    Draw,
}

/// One game on a fresh board.
pub struct Match {
    board: Board,
    seats: Vec<Box<dyn Participant>>,
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.seats.iter().map(|seat| seat.name()).collect();
        f.debug_struct("Match")
            .field("board", &self.board.encode())
            .field("seats", &names)
            .finish()
    }
}

impl Match {
    /// Seats the participants the configured mode calls for.
    ///
    /// Human against computer seats the human first; computer against
    /// computer seats a single computer that takes every turn.
    #[instrument(skip(config), fields(size = config.size(), mode = %config.mode()))]
    pub fn new(config: &GameConfig) -> Self {
        let computer = ComputerPlayer::new("Computer", *config.difficulty(), *config.search());
        let seats: Vec<Box<dyn Participant>> = match config.mode() {
            Mode::HumanVsComputer => vec![Box::new(HumanPlayer::new("You")), Box::new(computer)],
            Mode::ComputerVsComputer => vec![Box::new(computer.playing_both_sides())],
        };
        Self::with_seats(Board::new(*config.size()), seats)
    }

    /// Creates a match with explicit participants taking turns in order.
    pub fn with_seats(board: Board, seats: Vec<Box<dyn Participant>>) -> Self {
        Self { board, seats }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the board is terminal and announces the result.
    #[instrument(skip(self, console))]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Outcome> {
        if self.seats.is_empty() {
            bail!("A match needs at least one participant");
        }
        info!(size = self.board.size(), seats = self.seats.len(), "Starting match");

        let mut turn = 0;
        let mut last_seat = None;
        while !is_terminal(&self.board) {
            console.say(self.board.to_string().trim_end())?;

            let seat = turn % self.seats.len();
            let participant = &mut self.seats[seat];
            debug!(player = participant.name(), turn, "Waiting for move");
            let mv = participant.choose(&self.board, console)?;
            self.board.apply(mv)?;
            if let Some(line) = participant.announce(&mv) {
                console.say(&line)?;
            }

            last_seat = Some(seat);
            turn += 1;
        }

        console.say(self.board.to_string().trim_end())?;
        let outcome = match (evaluate(&self.board), last_seat) {
            (GameStatus::Won(marker), Some(seat)) => {
                let winner = &self.seats[seat];
                console.say(&winner.victory_message(marker))?;
                Outcome::Won {
                    winner: winner.name().to_string(),
                    marker,
                }
            }
            (GameStatus::Won(marker), None) => bail!("Board was already won by {marker}"),
            (GameStatus::Draw, _) => {
                console.say("It's a draw!")?;
                Outcome::Draw
            }
            (GameStatus::InProgress, _) => bail!("Match loop ended on a non-terminal board"),
        };

        info!(?outcome, turns = turn, "Match finished");
        Ok(outcome)
    }
}
