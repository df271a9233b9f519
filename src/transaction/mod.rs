//! Backup-then-write transaction for a single document
//!
//! A [`Transaction`] can only be created by taking a verified backup of the
//! target file, so the document is never overwritten without one.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::begin(&path, &backup_path)?;
//! transaction.write(&updated)?;
//!
//! // On success:
//! let backup = transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // the original bytes are written back
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{LexiconError, Result};
use crate::hash;

/// A pending rewrite of one file
#[derive(Debug)]
pub struct Transaction {
    /// File being rewritten
    target: PathBuf,

    /// Verified copy of the original contents
    backup_path: PathBuf,

    /// Original contents, restored on rollback
    original: Vec<u8>,

    /// Whether the target may have been modified
    written: bool,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    /// Copy `target` verbatim to `backup_path` and verify the copy
    ///
    /// Fails closed: if the backup cannot be written or does not match the
    /// original, no transaction exists and the target is untouched.
    pub fn begin(target: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Result<Self> {
        let target = target.into();
        let backup_path = backup_path.into();

        let original = fs::read(&target).map_err(|e| LexiconError::FileReadFailed {
            path: target.display().to_string(),
            reason: e.to_string(),
        })?;

        fs::write(&backup_path, &original).map_err(|e| LexiconError::BackupWriteFailed {
            path: backup_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let verify_failed = || LexiconError::BackupVerifyFailed {
            path: backup_path.display().to_string(),
        };
        let backup_hash = hash::hash_file(&backup_path).map_err(|_| verify_failed())?;
        if backup_hash != hash::hash_bytes(&original) {
            return Err(verify_failed());
        }

        info!(backup = %backup_path.display(), hash = %backup_hash, "Backup written");

        Ok(Self {
            target,
            backup_path,
            original,
            written: false,
            committed: false,
        })
    }

    /// Replace the target's contents
    ///
    /// The new contents go to a temporary file in the same directory which is
    /// then renamed over the target, keeping the target's permissions.
    pub fn write(&mut self, contents: &str) -> Result<()> {
        self.written = true;
        write_atomic(&self.target, contents.as_bytes())?;
        debug!(path = %self.target.display(), bytes = contents.len(), "Document written");
        Ok(())
    }

    /// Commit the transaction (prevent rollback) and return the backup path
    pub fn commit(mut self) -> PathBuf {
        self.committed = true;
        std::mem::take(&mut self.backup_path)
    }

    /// Restore the original contents if the target was written
    pub fn rollback(&mut self) -> Result<()> {
        if self.committed || !self.written {
            return Ok(());
        }

        fs::write(&self.target, &self.original).map_err(|e| LexiconError::FileWriteFailed {
            path: self.target.display().to_string(),
            reason: e.to_string(),
        })?;
        self.written = false;

        warn!(path = %self.target.display(), "Restored original contents");
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            // Automatic rollback on drop if not committed
            if let Err(e) = self.rollback() {
                eprintln!("Warning: Rollback failed: {}", e);
            }
        }
    }
}

fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    let write_failed = |reason: String| LexiconError::FileWriteFailed {
        path: target.display().to_string(),
        reason,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    temp.write_all(contents)
        .map_err(|e| write_failed(e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| write_failed(e.to_string()))?;

    match fs::metadata(target) {
        Ok(metadata) => {
            if let Err(e) = fs::set_permissions(temp.path(), metadata.permissions()) {
                warn!(path = %target.display(), error = %e, "Could not keep file permissions");
            }
        }
        Err(e) => warn!(path = %target.display(), error = %e, "Could not read file permissions"),
    }

    temp.persist(target)
        .map_err(|e| write_failed(e.error.to_string()))?;

    Ok(())
}
