//! Add command CLI wrapper
//!
//! Checks the input path, picks a prompter for the current stdin and
//! delegates to `operations::add` for all business logic.

use std::io::{self, IsTerminal};

use tracing::debug;

use crate::cli::Cli;
use crate::config::LexiconConfig;
use crate::error::{LexiconError, Result};
use crate::operations::add::AddOperation;
use crate::prompt::{LinePrompter, TerminalPrompter};

/// Run the add command
pub fn run(cli: &Cli) -> Result<()> {
    let config = LexiconConfig::from(cli);
    config.validate()?;

    if !cli.file.exists() {
        return Err(LexiconError::PathNotFound {
            path: cli.file.display().to_string(),
        });
    }

    let operation = AddOperation::new(&cli.file, &config);
    let outcome = if io::stdin().is_terminal() {
        operation.execute(&mut TerminalPrompter)?
    } else {
        debug!("stdin is not a terminal, reading answers line by line");
        operation.execute(&mut LinePrompter::new(io::stdin().lock(), io::stdout()))?
    };

    debug!(
        added = outcome.entries.len(),
        state = ?outcome.state,
        backup = ?outcome.backup,
        "Add command finished"
    );
    Ok(())
}
