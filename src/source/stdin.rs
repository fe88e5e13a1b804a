//! Stdin-based item source for piped input.

use crate::integration::{split_items, ItemSeparator};
use crate::model::error::InputError;
use std::io::{BufReader, IsTerminal, Read};

/// Stdin source for piped items.
///
/// Reads until EOF once; the list is static after that.
///
/// # Design
///
/// - Detects TTY vs piped input at construction
/// - Generic over the reader so tests can feed bytes directly
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
    complete: bool,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    /// This prevents the picker from blocking on input when the user forgot
    /// to pipe data.
    pub fn new() -> Result<Self, InputError> {
        if Self::is_tty() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(std::io::stdin()))
    }

    /// Check if stdin is a TTY (interactive terminal).
    fn is_tty() -> bool {
        std::io::stdin().is_terminal()
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader.
    ///
    /// Bypasses the TTY check.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            complete: false,
        }
    }

    /// Read everything up to EOF and split it into items.
    ///
    /// Returns an empty list on every call after the first.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors and invalid UTF-8.
    pub fn read_items(&mut self, separator: ItemSeparator) -> Result<Vec<String>, InputError> {
        if self.complete {
            return Ok(Vec::new());
        }
        let mut raw = String::new();
        self.reader.read_to_string(&mut raw)?;
        self.complete = true;
        Ok(split_items(&raw, separator))
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
