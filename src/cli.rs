//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{DEFAULT_BACKUP_SUFFIX, DEFAULT_MARKER};

/// Lexicon - add pronunciation entries to markdown frontmatter
///
/// Prompts for terms, definitions and stress patterns and appends them to the
/// `lexicon` list in the frontmatter of a markdown file.
#[derive(Parser, Debug)]
#[command(
    name = "lexicon",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add lexicon entries to markdown frontmatter",
    long_about = "Prompts for terms, definitions and stress patterns and appends them to the \
                  'lexicon' list in the frontmatter of a markdown file. The original file is \
                  backed up before it is rewritten.",
    after_help = "EXAMPLES:\n  \
                  Add entries interactively:\n    lexicon chapter-01.md\n\n\
                  Mark stress inline while typing a term:\n    Enter term: ch*apter\n\n\
                  Preview without writing:\n    lexicon chapter-01.md --dry-run\n\n\
                  Add entries from a script:\n    printf 'cat\\na feline\\ndone\\n' | lexicon chapter-01.md"
)]
pub struct Cli {
    /// Markdown file with a frontmatter block
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Show the updated frontmatter without touching the file
    #[arg(long)]
    pub dry_run: bool,

    /// Character marking the stressed syllable in a term
    #[arg(long, env = "LEXICON_MARKER", default_value_t = DEFAULT_MARKER)]
    pub marker: char,

    /// Suffix appended to the file path for the backup copy
    #[arg(long, env = "LEXICON_BACKUP_SUFFIX", default_value = DEFAULT_BACKUP_SUFFIX)]
    pub backup_suffix: String,
}
