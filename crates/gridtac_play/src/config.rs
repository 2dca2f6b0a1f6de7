//! Game settings from a TOML file, command-line flags or interactive prompts.

use crate::console::Console;
use derive_getters::Getters;
use gridtac::{ConfigError, ConfigErrorKind, Difficulty, SearchLimits};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// A human (O) against the computer. The human moves first.
    #[default]
    #[serde(rename = "1", alias = "pvc")]
    #[strum(to_string = "1", serialize = "pvc")]
    HumanVsComputer,

    /// The computer plays both sides.
    #[serde(rename = "2", alias = "cvc")]
    #[strum(to_string = "2", serialize = "cvc")]
    ComputerVsComputer,
}

impl Mode {
    /// Parses `1` / `2` (or `pvc` / `cvc`), reporting anything else as a config error.
    #[track_caller]
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().parse::<Mode>() {
            Ok(mode) => Ok(mode),
            Err(_) => Err(ConfigError::new(ConfigErrorKind::UnknownMode(
                value.to_string(),
            ))),
        }
    }
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    size: usize,

    /// Computer playing strength.
    difficulty: Difficulty,

    /// Who plays.
    mode: Mode,

    /// Depth caps for the computer's search.
    search: SearchLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            difficulty: Difficulty::Easy,
            mode: Mode::HumanVsComputer,
            search: SearchLimits::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with default search limits.
    pub fn new(size: usize, difficulty: Difficulty, mode: Mode) -> Self {
        Self {
            size,
            difficulty,
            mode,
            search: SearchLimits::default(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        info!(size = config.size, difficulty = %config.difficulty, mode = %config.mode, "Config loaded");
        config.validate()
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        difficulty: Option<&str>,
        mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = Difficulty::parse(difficulty)?;
        }
        if let Some(mode) = mode {
            self.mode = Mode::parse(mode)?;
        }
        self.validate()
    }

    /// Rejects settings that cannot produce a game.
    #[track_caller]
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::new(ConfigErrorKind::InvalidSize(self.size)));
        }
        Ok(self)
    }

    /// Asks for size, difficulty and mode, re-asking until each answer is valid.
    #[instrument(skip(console))]
    pub fn prompt(console: &mut dyn Console) -> anyhow::Result<Self> {
        let size = loop {
            let answer = console.ask("Enter the size of the board (e.g., 3 for a 3x3 board): ")?;
            match answer.parse::<usize>() {
                Ok(size) if size > 0 => break size,
                Ok(size) => console.say(&ConfigErrorKind::InvalidSize(size).to_string())?,
                Err(_) => console.say(&format!("{answer:?} is not a board size."))?,
            }
        };

        let difficulty = loop {
            let answer = console.ask("Choose difficulty level ('easy' or 'hard'): ")?;
            match Difficulty::parse(&answer) {
                Ok(difficulty) => break difficulty,
                Err(e) => console.say(&e.kind.to_string())?,
            }
        };

        let mode = loop {
            let answer = console.ask(
                "Choose game mode ('1' for player vs computer, '2' for computer vs computer): ",
            )?;
            match Mode::parse(&answer) {
                Ok(mode) => break mode,
                Err(e) => console.say(&e.kind.to_string())?,
            }
        };

        debug!(size, %difficulty, %mode, "Settings chosen");
        Ok(Self::new(size, difficulty, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::io::Cursor;

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("1").unwrap(), Mode::HumanVsComputer);
        assert_eq!(Mode::parse(" 2 ").unwrap(), Mode::ComputerVsComputer);
        assert_eq!(Mode::parse("CVC").unwrap(), Mode::ComputerVsComputer);
        let err = Mode::parse("3").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::UnknownMode("3".to_string()));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::HumanVsComputer.to_string(), "1");
        assert_eq!(Mode::ComputerVsComputer.to_string(), "2");
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.size(), 3);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.mode(), Mode::HumanVsComputer);
        assert_eq!(*config.search(), SearchLimits::default());
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default()
            .with_overrides(Some(4), Some("HARD"), Some("2"))
            .unwrap();
        assert_eq!(*config.size(), 4);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.mode(), Mode::ComputerVsComputer);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = GameConfig::default()
            .with_overrides(Some(0), None, None)
            .unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::InvalidSize(0));
    }

    #[test]
    fn test_prompt_reasks_invalid_answers() {
        let input = "zero\n0\n4\nmedium\nhard\n3\n2\n";
        let mut console = Terminal::new(Cursor::new(input), Vec::new());
        let config = GameConfig::prompt(&mut console).unwrap();
        assert_eq!(config, GameConfig::new(4, Difficulty::Hard, Mode::ComputerVsComputer));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("\"zero\" is not a board size."));
        assert!(output.contains("invalid board size 0"));
        assert!(output.contains("unknown difficulty \"medium\""));
        assert!(output.contains("unknown game mode \"3\""));
    }

    #[test]
    fn test_prompt_fails_on_eof() {
        let mut console = Terminal::new(Cursor::new("3\n"), Vec::new());
        assert!(GameConfig::prompt(&mut console).is_err());
    }
}
