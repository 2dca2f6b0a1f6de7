//! Line-oriented terminal I/O shared by prompts and the match loop.

use anyhow::{Result, bail};
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Where the game prints and where it reads answers from.
pub trait Console {
    /// Prints one line.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Prints `prompt` without a newline and reads one trimmed line.
    ///
    /// Fails when input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Console over any reader/writer pair.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a console from a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            bail!("Input closed while waiting for an answer to {prompt:?}");
        }
        trace!(answer = answer.trim(), "read answer");
        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut console = Terminal::new(Cursor::new("  hard \n"), Vec::new());
        assert_eq!(console.ask("Difficulty: ").unwrap(), "hard");
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Difficulty: ");
    }

    #[test]
    fn test_ask_fails_on_eof() {
        let mut console = Terminal::new(Cursor::new(""), Vec::new());
        assert!(console.ask("Row: ").is_err());
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Terminal::new(Cursor::new(""), Vec::new());
        console.say("It's a draw!").unwrap();
        assert_eq!(console.into_output(), b"It's a draw!\n");
    }
}
