//! Error types for wraplist.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the picker binary
//!   - [`InputError`] - File/stdin reading failures (file not found, no input, IO)
//!   - [`RenderError`] - Viewport cannot be drawn (zero width or height)
//!   - `std::io::Error` - Terminal failures
//!
//! # Recovery Strategy
//!
//! Navigation never fails: moves and marks past the ends of the list are
//! clamped. The only failure the list engine itself reports is
//! [`RenderError::ZeroViewport`], which the caller must handle explicitly.
//! A zero dimension is never silently clamped to one.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use wraplist::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _items = read_items()?;
///     Ok(())
/// }
/// # fn read_items() -> Result<Vec<String>, InputError> { Ok(vec![]) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read items from file or stdin.
    ///
    /// **Recovery**: Display error to user and exit with non-zero status.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The list could not be rendered into the current viewport.
    ///
    /// Happens when the terminal reports a zero-sized area.
    #[error("Failed to render list: {0}")]
    Render(#[from] RenderError),

    /// Terminal or TUI error (raw mode, alternate screen, broken pipe).
    ///
    /// **Recovery**: Attempt terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading items from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified item file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use wraplist::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file argument was given and stdin is a terminal.
    ///
    /// **Recovery**: Display usage help. The user must provide a file path
    /// or pipe items to stdin.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O failure (permissions, invalid UTF-8, disk errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The list cannot be drawn.
///
/// Returned by [`crate::state::list_state::ListState::render`] before any
/// output is produced.
///
/// # Examples
///
/// ```
/// use wraplist::model::error::RenderError;
///
/// let err = RenderError::ZeroViewport { width: 0, height: 10 };
/// assert_eq!(
///     err.to_string(),
///     "can't display with zero width or height of viewport"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Width or height of the viewport is zero.
    #[error("can't display with zero width or height of viewport")]
    ZeroViewport {
        /// Requested width in columns.
        width: u16,
        /// Requested height in rows.
        height: u16,
    },
}
