//! File-based item source.

use crate::integration::{split_items, ItemSeparator};
use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Items read from a file once.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    drained: bool,
}

impl FileSource {
    /// Create a FileSource for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        // Check if file exists before trying to open
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            drained: false,
        })
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and split the whole file. Empty on every call after the first.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and invalid UTF-8.
    pub fn read_items(&mut self, separator: ItemSeparator) -> Result<Vec<String>, InputError> {
        if self.drained {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        self.drained = true;
        Ok(split_items(&raw, separator))
    }
}
