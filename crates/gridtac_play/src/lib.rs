//! gridtac_play - terminal front end for gridtac
//!
//! Reads game settings, seats a human and/or the computer at an N×N board
//! and runs the match loop, printing the board after every move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod console;
mod game;
mod players;

pub use analysis::{Report, analyze};
pub use cli::{Cli, Command};
pub use config::{GameConfig, Mode};
pub use console::{Console, Terminal};
pub use game::{Match, Outcome};
pub use players::{ComputerPlayer, HumanPlayer, Participant};
