//! File-backed blob store.
//!
//! Stores one `<key>.json` file per key under a base directory. Writes go
//! to a temp file first and are renamed into place so a crash mid-write
//! never leaves a truncated document behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, Result};

/// Blob store keeping each key as a JSON file in a directory.
#[derive(Debug)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the directory cannot be created.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)
            .map_err(|e| LedgerError::Storage(format!("Cannot create {}: {}", base_dir.display(), e)))?;
        Ok(Self { base_dir })
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json.tmp", key))
    }

    /// Rename with fallback for platforms where rename fails if the target
    /// exists (notably Windows). Cleans up the temp file when the rename
    /// ultimately fails.
    fn replace_file(temp: &Path, destination: &Path) -> io::Result<()> {
        if let Err(initial_err) = fs::rename(temp, destination) {
            let _ = fs::remove_file(destination);
            fs::rename(temp, destination).map_err(|retry_err| {
                let _ = fs::remove_file(temp);
                io::Error::new(
                    retry_err.kind(),
                    format!("Atomic rename failed (initial: {}, retry: {})", initial_err, retry_err),
                )
            })?;
        }
        Ok(())
    }
}

impl super::BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::Storage(format!("Failed to read {}: {}", key, e))),
        }
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        let temp = self.temp_path_for(key);
        fs::write(&temp, document)
            .map_err(|e| LedgerError::Storage(format!("Failed to write {}: {}", key, e)))?;
        Self::replace_file(&temp, &self.path_for(key))
            .map_err(|e| LedgerError::Storage(format!("Failed to store {}: {}", key, e)))?;
        Ok(())
    }
}
