//! The interactive read-translate-retry loop.
//!
//! The loop talks to the user through a [`Prompter`]: `TerminalPrompter`
//! drives `dialoguer` prompts on a TTY, `LinePrompter` reads plain lines and
//! serves piped input and tests.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::decomposer::Decomposer;
use crate::errors::{InputError, TranslateError};
use crate::input::{marker, parse_number};
use crate::ui;

pub const PROMPT: &str = "Please enter a number and I'll write it as an English numeral for you:";
pub const RETRY_PROMPT: &str = "Do you want to test another? y/n";

/// The user-facing side of a session.
pub trait Prompter {
    /// Ask for a number. `None` when input is exhausted.
    fn read_number(&mut self) -> Result<Option<String>>;

    /// Ask whether to translate another number.
    fn confirm_retry(&mut self) -> Result<bool>;

    /// Show a successful translation.
    fn report(&mut self, line: &str) -> Result<()>;

    /// Show a rejected input.
    fn report_error(&mut self, line: &str) -> Result<()>;
}

/// Outcome of translating one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Translated { value: u64, phrase: String },
    Invalid(InputError),
    Rejected { value: u64, error: TranslateError },
}

impl Answer {
    pub fn is_translated(&self) -> bool {
        matches!(self, Answer::Translated { .. })
    }

    /// The echo line shown for `raw`.
    pub fn render(&self, raw: &str) -> String {
        let marker = marker(raw);
        match self {
            Answer::Translated { value, phrase } => {
                format!("{marker} (Read as {value}): \"{phrase}\"")
            }
            Answer::Invalid(error) => format!("{marker} Can't parse this number! ({error})"),
            Answer::Rejected { value, error } => {
                format!("{marker} Can't translate {value}: {error}")
            }
        }
    }
}

/// Parse and translate one raw input line.
pub fn answer(decomposer: &Decomposer<'_>, raw: &str, capitalize: bool) -> Answer {
    let value = match parse_number(raw) {
        Ok(value) => value,
        Err(error) => return Answer::Invalid(error),
    };
    match decomposer.translate(value) {
        Ok(phrase) => Answer::Translated {
            value,
            phrase: if capitalize {
                phrase.capitalized()
            } else {
                phrase.into_string()
            },
        },
        Err(error) => Answer::Rejected { value, error },
    }
}

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub translated: usize,
    pub rejected: usize,
}

pub struct Session<'a, P: Prompter> {
    decomposer: Decomposer<'a>,
    prompter: P,
    capitalize: bool,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(decomposer: Decomposer<'a>, prompter: P, capitalize: bool) -> Self {
        Self {
            decomposer,
            prompter,
            capitalize,
        }
    }

    /// Prompt, translate and echo until the user declines or input ends.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        while let Some(raw) = self.prompter.read_number()? {
            let answer = answer(&self.decomposer, &raw, self.capitalize);
            let line = answer.render(&raw);

            if answer.is_translated() {
                summary.translated += 1;
                self.prompter.report(&line)?;
            } else {
                summary.rejected += 1;
                tracing::debug!("Rejected input {:?}: {:?}", raw, answer);
                self.prompter.report_error(&line)?;
            }

            if !self.prompter.confirm_retry()? {
                break;
            }
        }

        tracing::debug!(
            "Session ended: {} translated, {} rejected",
            summary.translated,
            summary.rejected
        );
        Ok(summary)
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }
}

/// Line-oriented prompter over arbitrary reader and writers.
pub struct LinePrompter<R, W, E> {
    reader: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> LinePrompter<R, W, E> {
    pub fn new(reader: R, out: W, err: E) -> Self {
        Self { reader, out, err }
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.reader, self.out, self.err)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write, E: Write> Prompter for LinePrompter<R, W, E> {
    fn read_number(&mut self) -> Result<Option<String>> {
        writeln!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn confirm_retry(&mut self) -> Result<bool> {
        writeln!(self.out, "{RETRY_PROMPT}")?;
        self.out.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y")))
    }

    fn report(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn report_error(&mut self, line: &str) -> Result<()> {
        writeln!(self.err, "{}", ui::error_line(line))?;
        Ok(())
    }
}

/// Prompter for an interactive terminal.
pub struct TerminalPrompter {
    out: console::Term,
    err: console::Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            out: console::Term::stdout(),
            err: console::Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_number(&mut self) -> Result<Option<String>> {
        use dialoguer::Input;

        let raw: String = Input::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text_on(&self.out)
            .context("Failed to read number")?;
        Ok(Some(raw))
    }

    fn confirm_retry(&mut self) -> Result<bool> {
        use dialoguer::Confirm;

        let again = Confirm::new()
            .with_prompt("Do you want to test another?")
            .default(false)
            .interact_on(&self.out)
            .unwrap_or(false);
        Ok(again)
    }

    fn report(&mut self, line: &str) -> Result<()> {
        self.out.write_line(line)?;
        Ok(())
    }

    fn report_error(&mut self, line: &str) -> Result<()> {
        self.err.write_line(&ui::error_line(line))?;
        Ok(())
    }
}
