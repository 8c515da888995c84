//! Interactive prompts for paths not given on the command line

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const INPUT_PROMPT: &str = "Enter file name with OpenR show tech output: ";
pub const OUTPUT_PROMPT: &str = "Enter path and file name to save the topology graph: ";

/// Asks questions on one stream and reads answers from another
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line
    ///
    /// # Errors
    /// Returns an error if the streams fail or the answer is empty.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read answer")?;

        let answer = answer.trim();
        if answer.is_empty() {
            bail!("No answer given to '{}'", question.trim_end_matches([':', ' ']));
        }
        Ok(answer.to_string())
    }

    /// Use `given` if present, otherwise ask for a path
    ///
    /// # Errors
    /// Returns an error if prompting fails.
    pub fn path_or_ask(&mut self, given: Option<PathBuf>, question: &str) -> Result<PathBuf> {
        match given {
            Some(path) => Ok(path),
            None => self.ask(question).map(PathBuf::from),
        }
    }
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompter reading stdin and asking on stderr
    ///
    /// Questions stay off stdout so piped `--json` output is not mixed with
    /// prompt text.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}
