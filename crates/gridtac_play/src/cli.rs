//! Command-line interface for gridtac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridtac - tic-tac-toe on N×N boards against an alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "gridtac")]
#[command(about = "Tic-tac-toe on N×N boards against an alpha-beta search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    ///
    /// Without any flags or config file, the settings are asked for interactively.
    Play {
        /// Board side length
        #[arg(short, long)]
        size: Option<usize>,

        /// Computer strength: 'easy' or 'hard'
        #[arg(short, long)]
        difficulty: Option<String>,

        /// '1' for player vs computer, '2' for computer vs computer
        #[arg(short, long)]
        mode: Option<String>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the status of a board and the computer's move on it as JSON
    Analyze {
        /// Board rows separated by '/', cells X, O and '.' (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: String,

        /// Computer strength: 'easy' or 'hard'
        #[arg(short, long, default_value = "easy")]
        difficulty: String,

        /// Remaining-move count passed to the selector (defaults to the empty squares)
        #[arg(short, long)]
        remaining: Option<usize>,

        /// Path to a TOML settings file for the search limits
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
