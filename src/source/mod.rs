//! Item input sources.
//!
//! This module provides input sources for the picker:
//! - File loading for read-once file input
//! - Stdin for piped input
//! - Unified InputSource enum for both

use crate::integration::ItemSeparator;
use crate::model::error::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for items.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File given on the command line.
    File(FileSource),
    /// Piped stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read all items from the source.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn read_items(&mut self, separator: ItemSeparator) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::File(f) => f.read_items(separator),
            InputSource::Stdin(s) => s.read_items(separator),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource
/// 2. If stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
