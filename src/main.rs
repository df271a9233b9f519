//! Lexicon - pronunciation lexicon editor
//!
//! Adds term/definition/stress entries to the `lexicon` list in the frontmatter
//! of a markdown file, leaving the rest of the file as it was.

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod entry;
mod error;
mod frontmatter;
mod hash;
mod operations;
mod prompt;
mod stress;
mod transaction;

use cli::Cli;
use error::LexiconError;

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): no logging unless `RUST_LOG` is set
/// - 1 (-v): INFO (backup and insertion summary)
/// - 2 (-vv): DEBUG (frontmatter location, accepted entries)
/// - 3+ (-vvv): TRACE with file/line numbers
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => return,
            1 => "warn,lexicon=info".to_string(),
            2 => "warn,lexicon=debug".to_string(),
            _ => "debug,lexicon=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .without_time()
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Clap's own message, without its `error: ` prefix and usage footer
fn usage_reason(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let message = rendered.split("\n\n").next().unwrap_or_default().trim_end();
    message.strip_prefix("error: ").unwrap_or(message).to_string()
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let err = LexiconError::Usage {
                reason: usage_reason(&e),
            };
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    if let Err(e) = commands::add::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
