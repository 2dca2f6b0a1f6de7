//! gridtac - terminal tic-tac-toe on N×N boards

use anyhow::{Context, Result};
use clap::Parser;
use gridtac::{Board, Difficulty};
use gridtac_play::{Cli, Command, GameConfig, Match, Terminal, analyze};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            difficulty,
            mode,
            config,
        } => run_play(size, difficulty, mode, config),
        Command::Analyze {
            board,
            difficulty,
            remaining,
            config,
        } => run_analyze(board, difficulty, remaining, config),
    }
}

/// Resolve settings and play one match on stdin/stdout
#[instrument]
fn run_play(
    size: Option<usize>,
    difficulty: Option<String>,
    mode: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut console = Terminal::stdio();

    let interactive =
        size.is_none() && difficulty.is_none() && mode.is_none() && config.is_none();
    let settings = if interactive {
        GameConfig::prompt(&mut console)?
    } else {
        let base = match &config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        base.with_overrides(size, difficulty.as_deref(), mode.as_deref())?
    };

    info!(?settings, "Starting game");
    let outcome = Match::new(&settings).run(&mut console)?;
    info!(?outcome, "Game over");
    Ok(())
}

/// Evaluate one board and print the report as JSON
#[instrument]
fn run_analyze(
    board: String,
    difficulty: String,
    remaining: Option<usize>,
    config: Option<PathBuf>,
) -> Result<()> {
    let difficulty = Difficulty::parse(&difficulty)?;
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let limits = match &config {
        Some(path) => *GameConfig::from_file(path)?.search(),
        None => Default::default(),
    };

    let report = analyze(&board, difficulty, remaining, limits);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
