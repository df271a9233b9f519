//! Error types and handling for lexicon
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for lexicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum LexiconError {
    // Usage errors
    #[error("{reason}\n\nUsage: lexicon [OPTIONS] <FILE>")]
    #[diagnostic(
        code(lexicon::cli::usage),
        help("Pass exactly one path to a markdown file")
    )]
    Usage { reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(lexicon::config::invalid))]
    ConfigInvalid { message: String },

    // Document errors
    #[error("File '{path}' not found")]
    #[diagnostic(code(lexicon::fs::not_found))]
    PathNotFound { path: String },

    #[error("Could not find frontmatter in {path}")]
    #[diagnostic(
        code(lexicon::document::no_frontmatter),
        help("The file must start with a '---' line and close the frontmatter with another '---' line")
    )]
    NoFrontmatter { path: String },

    #[error("The lexicon key in {path} holds an inline value: {value}")]
    #[diagnostic(
        code(lexicon::document::inline_value),
        help("Replace the value with an empty 'lexicon:' key or a block list before adding entries")
    )]
    InlineLexiconValue { path: String, value: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(lexicon::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(lexicon::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to write backup: {path}: {reason}")]
    #[diagnostic(
        code(lexicon::backup::write_failed),
        help("The original file was left unchanged")
    )]
    BackupWriteFailed { path: String, reason: String },

    #[error("Backup at {path} does not match the original file")]
    #[diagnostic(
        code(lexicon::backup::verify_failed),
        help("The original file was left unchanged")
    )]
    BackupVerifyFailed { path: String },

    // Prompt errors
    #[error("Failed to read input: {message}")]
    #[diagnostic(code(lexicon::prompt::failed))]
    PromptFailed { message: String },
}

impl From<inquire::InquireError> for LexiconError {
    fn from(err: inquire::InquireError) -> Self {
        LexiconError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = LexiconError::PathNotFound {
            path: "notes.md".to_string(),
        };
        assert_eq!(err.to_string(), "File 'notes.md' not found");
    }

    #[test]
    fn test_error_code() {
        let err = LexiconError::NoFrontmatter {
            path: "notes.md".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("lexicon::document::no_frontmatter".to_string())
        );
    }

    #[test]
    fn test_backup_errors_promise_untouched_original() {
        let err = LexiconError::BackupWriteFailed {
            path: "notes.md.bak".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.help().map(|h| h.to_string()),
            Some("The original file was left unchanged".to_string())
        );
    }

    #[test]
    fn test_inquire_error_conversion() {
        let err: LexiconError = inquire::InquireError::NotTTY.into();
        assert!(matches!(err, LexiconError::PromptFailed { .. }));
    }

    test_error_contains!(
        test_usage_error_shows_usage,
        LexiconError::Usage {
            reason: "missing a required argument".to_string()
        },
        "missing a required argument",
        "Usage: lexicon"
    );

    test_error_contains!(
        test_no_frontmatter_error,
        LexiconError::NoFrontmatter {
            path: "doc.md".to_string()
        },
        "Could not find frontmatter",
        "doc.md"
    );

    test_error_contains!(
        test_inline_value_error,
        LexiconError::InlineLexiconValue {
            path: "doc.md".to_string(),
            value: "none".to_string()
        },
        "inline value",
        "none"
    );

    test_error_contains!(
        test_backup_verify_error,
        LexiconError::BackupVerifyFailed {
            path: "doc.md.bak".to_string()
        },
        "does not match",
        "doc.md.bak"
    );
}
