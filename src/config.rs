//! Runtime configuration for one lexicon run

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{LexiconError, Result};

/// Character placed before the stressed syllable
pub const DEFAULT_MARKER: char = '*';

/// Term input that ends entry collection (case-insensitive)
pub const DEFAULT_SENTINEL: &str = "done";

/// Appended to the document path to name the backup copy
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    pub marker: char,
    pub sentinel: String,
    pub backup_suffix: String,
    /// Print the updated frontmatter instead of writing the file
    pub dry_run: bool,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            sentinel: DEFAULT_SENTINEL.to_string(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            dry_run: false,
        }
    }
}

impl From<&Cli> for LexiconConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            marker: cli.marker,
            backup_suffix: cli.backup_suffix.clone(),
            dry_run: cli.dry_run,
            ..Self::default()
        }
    }
}

impl LexiconConfig {
    /// Reject settings that would corrupt entries or overwrite the document
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_whitespace() || self.marker == '"' || self.marker == '\\' {
            return Err(LexiconError::ConfigInvalid {
                message: format!(
                    "stress marker {:?} cannot be whitespace, a quote or a backslash",
                    self.marker
                ),
            });
        }

        if self.backup_suffix.is_empty() {
            return Err(LexiconError::ConfigInvalid {
                message: "backup suffix cannot be empty".to_string(),
            });
        }

        if self.backup_suffix.contains(std::path::is_separator) {
            return Err(LexiconError::ConfigInvalid {
                message: format!(
                    "backup suffix '{}' cannot contain a path separator",
                    self.backup_suffix
                ),
            });
        }

        Ok(())
    }

    /// Sibling path holding the pre-edit copy of `path`
    pub fn backup_path(&self, path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(&self.backup_suffix);
        PathBuf::from(name)
    }
}
