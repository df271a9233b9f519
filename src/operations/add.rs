//! Add operation: collect entries and splice them into a document
//!
//! Steps, in order: read the file, locate the frontmatter, collect entries
//! from the operator, splice them into the lexicon list, back up the file and
//! write the result. Every failure before the write leaves the file untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LexiconConfig;
use crate::entry::LexiconEntry;
use crate::error::{LexiconError, Result};
use crate::frontmatter::{Document, LexiconState, detect_state, inline_value, splice_entries};
use crate::prompt::{Prompter, collect_entries};
use crate::transaction::Transaction;

/// What an add run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Entries collected, in insertion order
    pub entries: Vec<LexiconEntry>,
    /// Lexicon state before the insertion, if anything was inserted
    pub state: Option<LexiconState>,
    /// Backup written before the file was rewritten
    pub backup: Option<PathBuf>,
}

/// Add lexicon entries to one markdown file
pub struct AddOperation<'a> {
    path: &'a Path,
    config: &'a LexiconConfig,
}

impl<'a> AddOperation<'a> {
    pub fn new(path: &'a Path, config: &'a LexiconConfig) -> Self {
        Self { path, config }
    }

    /// Run the operation, asking `prompter` for entries
    pub fn execute<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<AddOutcome> {
        let content = fs::read_to_string(self.path).map_err(|e| LexiconError::FileReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let document = self.locate(&content)?;
        let entries = collect_entries(prompter, self.config)?;

        if entries.is_empty() {
            prompter.say("No entries added.")?;
            return Ok(AddOutcome {
                entries,
                state: None,
                backup: None,
            });
        }

        let state = detect_state(&document.frontmatter);
        info!(count = entries.len(), ?state, "Inserting lexicon entries");

        let blocks: Vec<String> = entries.iter().map(LexiconEntry::to_block).collect();
        let updated = Document {
            frontmatter: splice_entries(&document.frontmatter, &blocks),
            body: document.body,
        };

        if self.config.dry_run {
            prompter.say(&format!("\n{}", updated.frontmatter))?;
            prompter.say("\nDry run: file not modified.")?;
            return Ok(AddOutcome {
                entries,
                state: Some(state),
                backup: None,
            });
        }

        let mut transaction = Transaction::begin(self.path, self.config.backup_path(self.path))?;
        transaction.write(&updated.assemble())?;
        let backup = transaction.commit();

        prompter.say(&format!(
            "\nFile updated successfully. Backup saved as {}",
            backup.display()
        ))?;

        Ok(AddOutcome {
            entries,
            state: Some(state),
            backup: Some(backup),
        })
    }

    /// Split the document and reject frontmatter the splicer cannot extend
    fn locate(&self, content: &str) -> Result<Document> {
        let document = Document::parse(content).ok_or_else(|| LexiconError::NoFrontmatter {
            path: self.path.display().to_string(),
        })?;

        if let Some(value) = inline_value(&document.frontmatter) {
            return Err(LexiconError::InlineLexiconValue {
                path: self.path.display().to_string(),
                value: value.to_string(),
            });
        }

        debug!(
            frontmatter_bytes = document.frontmatter.len(),
            body_bytes = document.body.len(),
            "Frontmatter located"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompter;
    use std::io::Cursor;
    use tempfile::TempDir;

    const BODY: &str = "# Chapter One\n\n---\n\nIt was a dark night.\n";

    fn write_doc(temp: &TempDir, frontmatter: &str) -> PathBuf {
        let path = temp.path().join("chapter.md");
        fs::write(&path, format!("---\n{frontmatter}\n---\n{BODY}")).unwrap();
        path
    }

    fn run(path: &Path, config: &LexiconConfig, input: &str) -> (Result<AddOutcome>, String) {
        let mut prompter = LinePrompter::new(Cursor::new(input.to_string()), Vec::new());
        let result = AddOperation::new(path, config).execute(&mut prompter);
        (result, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn test_absent_lexicon_added() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "title: \"Doc\"");

        let (result, output) = run(&path, &LexiconConfig::default(), "cat\na feline\ndone\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.state, Some(LexiconState::Absent));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!(
                "---\ntitle: \"Doc\"\nlexicon:\n  - term: \"cat\"\n    definition: \"a feline\"\n    stressed: \"cat\"\n---\n{BODY}"
            )
        );
        assert!(output.contains("File updated successfully"));
    }

    #[test]
    fn test_backup_holds_original() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "title: \"Doc\"\nlexicon:");
        let original = fs::read_to_string(&path).unwrap();

        let (result, _) = run(&path, &LexiconConfig::default(), "cat\na feline\ndone\n");
        let backup = result.unwrap().backup.unwrap();

        assert_eq!(backup, temp.path().join("chapter.md.bak"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
    }

    #[test]
    fn test_populated_keeps_existing_entries_first() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(
            &temp,
            "title: x\nlexicon:\n  - term: \"dog\"\n    definition: \"a canine\"\n    stressed: \"dog\"\nauthor: me",
        );

        let (result, _) = run(&path, &LexiconConfig::default(), "cat\na feline\ndone\n");
        assert_eq!(result.unwrap().state, Some(LexiconState::Populated));

        let written = fs::read_to_string(&path).unwrap();
        let document = Document::parse(&written).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&document.frontmatter).unwrap();
        assert_eq!(value["lexicon"][0]["term"].as_str(), Some("dog"));
        assert_eq!(value["lexicon"][1]["term"].as_str(), Some("cat"));
        assert_eq!(value["author"].as_str(), Some("me"));
        assert_eq!(document.body, BODY);
    }

    #[test]
    fn test_no_entries_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "title: x");
        let original = fs::read_to_string(&path).unwrap();

        let (result, output) = run(&path, &LexiconConfig::default(), "done\n");

        assert!(result.unwrap().entries.is_empty());
        assert!(output.contains("No entries added."));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        assert!(!temp.path().join("chapter.md.bak").exists());
    }

    #[test]
    fn test_no_frontmatter_aborts_before_prompting() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.md");
        fs::write(&path, "# Just a body\n").unwrap();

        let (result, output) = run(&path, &LexiconConfig::default(), "cat\na feline\ndone\n");

        assert!(matches!(result, Err(LexiconError::NoFrontmatter { .. })));
        assert!(!output.contains("Enter term"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Just a body\n");
    }

    #[test]
    fn test_inline_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "lexicon: none");

        let (result, _) = run(&path, &LexiconConfig::default(), "cat\na feline\ndone\n");

        assert!(matches!(
            result,
            Err(LexiconError::InlineLexiconValue { ref value, .. }) if value == "none"
        ));
    }

    #[test]
    fn test_backup_failure_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "title: x");
        let original = fs::read_to_string(&path).unwrap();
        fs::create_dir(temp.path().join("chapter.md.bak")).unwrap();

        let (result, output) = run(&path, &LexiconConfig::default(), "cat\na feline\ndone\n");

        assert!(matches!(result, Err(LexiconError::BackupWriteFailed { .. })));
        assert!(!output.contains("File updated successfully"));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_dry_run_prints_frontmatter_only() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "title: x");
        let original = fs::read_to_string(&path).unwrap();
        let config = LexiconConfig {
            dry_run: true,
            ..LexiconConfig::default()
        };

        let (result, output) = run(&path, &config, "ch*apter\na section\ndone\n");

        assert!(result.unwrap().backup.is_none());
        assert!(output.contains("stressed: \"ch*apter\""));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        assert!(!temp.path().join("chapter.md.bak").exists());
    }

    #[test]
    fn test_custom_backup_suffix() {
        let temp = TempDir::new().unwrap();
        let path = write_doc(&temp, "title: x");
        let config = LexiconConfig {
            backup_suffix: ".orig".to_string(),
            ..LexiconConfig::default()
        };

        let (result, _) = run(&path, &config, "cat\na feline\ndone\n");

        assert_eq!(
            result.unwrap().backup,
            Some(temp.path().join("chapter.md.orig"))
        );
    }
}
