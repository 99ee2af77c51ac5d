//! File persistence for the ledger.
//!
//! The on-disk format is the ledger blob verbatim: a UTF-8 text file whose
//! first line is the score and whose remaining lines are encoded goals. No
//! header, no version tag. Save and load are whole-file operations.

use std::{fs, io, path::PathBuf};

use crate::ledger::{Ledger, LoadSummary};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("save file not found: {}", .0.display())]
    SaveNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-based storage for one ledger.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage instance backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default save path: `~/.questlog/quest.txt`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".questlog").join("quest.txt"))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes the ledger to the save file, creating parent directories as
    /// needed.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, ledger.save())?;
        Ok(())
    }

    /// Replaces the ledger's contents from the save file.
    ///
    /// A missing file is an error and leaves the ledger untouched — no
    /// partial clear.
    pub fn load(&self, ledger: &mut Ledger) -> Result<LoadSummary> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::SaveNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(ledger.load(&blob))
    }
}
