//! Operator prompts for collecting lexicon entries
//!
//! Entry collection talks to the operator through the [`Prompter`] trait.
//! [`TerminalPrompter`] uses `inquire` when stdin is a terminal and
//! [`LinePrompter`] reads plain lines, which keeps the tool scriptable.

use std::io::{BufRead, Write};

use console::Style;
use inquire::{InquireError, Text};
use tracing::debug;

use crate::config::LexiconConfig;
use crate::entry::{LexiconEntry, TermInput};
use crate::error::{LexiconError, Result};
use crate::stress;

/// Request/response exchange with the operator
pub trait Prompter {
    /// Ask one question. `None` means the operator ended input.
    fn ask(&mut self, message: &str, help: Option<&str>) -> Result<Option<String>>;

    /// Show a status line
    fn say(&mut self, line: &str) -> Result<()>;
}

/// Interactive prompts on the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str, help: Option<&str>) -> Result<Option<String>> {
        let mut text = Text::new(message);
        if let Some(help) = help {
            text = text.with_help_message(help);
        }

        match text.prompt() {
            Ok(answer) => Ok(Some(answer)),
            // Esc ends collection like the sentinel; Ctrl-C aborts the run
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// Line-oriented prompts over any reader and writer
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str, _help: Option<&str>) -> Result<Option<String>> {
        write!(self.output, "{message} ").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(prompt_error)? == 0 {
            writeln!(self.output).map_err(prompt_error)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").map_err(prompt_error)
    }
}

fn prompt_error(err: std::io::Error) -> LexiconError {
    LexiconError::PromptFailed {
        message: err.to_string(),
    }
}

/// Ask until the answer is non-empty after trimming
fn ask_non_empty<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    help: Option<&str>,
) -> Result<Option<String>> {
    loop {
        match prompter.ask(message, help)? {
            Some(answer) if answer.trim().is_empty() => continue,
            Some(answer) => return Ok(Some(answer.trim().to_string())),
            None => return Ok(None),
        }
    }
}

/// Collect entries until the operator types the sentinel or input ends
///
/// Terms carrying the stress marker are used as the stressed form directly.
/// Other terms get a stressed-form prompt only when the syllable heuristic
/// finds more than one vowel group. An entry interrupted by end of input is
/// dropped; entries already accepted are kept.
pub fn collect_entries<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &LexiconConfig,
) -> Result<Vec<LexiconEntry>> {
    let sentinel = config.sentinel.as_str();
    let marker = config.marker;
    let term_prompt = format!("Enter term (or '{sentinel}' to finish):");
    let term_help = format!("Put '{marker}' before the stressed syllable, e.g. ch{marker}apter");
    let stressed_prompt = format!("Enter stressed form (e.g., ch{marker}apter):");
    let added = Style::new().green();

    prompter.say(&format!(
        "\nAdding new lexicon entries. Type '{sentinel}' to finish."
    ))?;

    let mut entries = Vec::new();
    loop {
        let Some(raw) = ask_non_empty(prompter, &term_prompt, Some(term_help.as_str()))? else {
            break;
        };
        if raw.eq_ignore_ascii_case(sentinel) {
            break;
        }

        let Some(definition) = prompter.ask("Enter definition:", None)? else {
            break;
        };
        let definition = definition.trim().to_string();

        let entry = match TermInput::parse(&raw, marker) {
            TermInput::Marked { term, stressed } => LexiconEntry::new(term, definition, stressed),
            TermInput::Plain(term) if stress::is_monosyllabic(&term) => {
                LexiconEntry::new(term.clone(), definition, term)
            }
            TermInput::Plain(term) => {
                let Some(stressed) = ask_non_empty(prompter, &stressed_prompt, None)? else {
                    break;
                };
                LexiconEntry::new(term, definition, stressed)
            }
        };

        debug!(term = %entry.term, stressed = %entry.stressed, "Entry accepted");
        prompter.say(&format!("{} {entry}", added.apply_to("Added:")))?;
        entries.push(entry);
    }

    Ok(entries)
}
