//! Common test utilities for lexicon integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Body used by documents created with [`TestWorkspace::write_document`]
#[allow(dead_code)]
pub const BODY: &str = "# Chapter One\n\nThe text mentions a chapter.\n\n---\n\nlexicon:\n";

/// A temporary directory holding test documents
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a markdown document with the given frontmatter and [`BODY`]
    #[allow(dead_code)]
    pub fn write_document(&self, path: &str, frontmatter: &str) {
        self.write_file(path, &format!("---\n{frontmatter}\n---\n{BODY}"));
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real lexicon binary, isolated from the caller's environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn lexicon_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lexicon").expect("Failed to find lexicon binary");
    cmd.env_remove("LEXICON_MARKER")
        .env_remove("LEXICON_BACKUP_SUFFIX")
        .env_remove("RUST_LOG");
    cmd
}

/// Command for the lexicon binary running inside `workspace`
#[allow(dead_code)]
pub fn lexicon_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = lexicon_cmd();
    cmd.current_dir(&workspace.path);
    cmd
}
