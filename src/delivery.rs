//! Summary delivery seam. A messaging endpoint receives the summary text,
//! optionally together with a yes/no question for the reader.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// A yes/no question shown after the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub prompt: String,
}

impl Confirmation {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

pub trait SummarySender {
    /// Deliver `summary`. When `confirmation` is given, returns the reader's
    /// answer; otherwise `None`.
    fn send(&mut self, summary: &str, confirmation: Option<&Confirmation>)
    -> AppResult<Option<bool>>;
}

/// Writes the summary to a terminal-like writer and reads answers from a
/// line-based reader.
pub struct ConsoleSender<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSender<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsoleSender<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> SummarySender for ConsoleSender<R, W> {
    fn send(
        &mut self,
        summary: &str,
        confirmation: Option<&Confirmation>,
    ) -> AppResult<Option<bool>> {
        writeln!(self.output, "{summary}")?;

        let Some(question) = confirmation else {
            self.output.flush()?;
            return Ok(None);
        };

        write!(self.output, "\n{} [y/N]: ", question.prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let ans = answer.trim().to_ascii_lowercase();

        Ok(Some(ans == "y" || ans == "yes"))
    }
}
