//! Text measurement and wrapping (pure).
//!
//! - `ansi`: escape-aware tokenizing, printable width, clipping
//! - `wrap`: word wrapping of item text into display lines

pub mod ansi;
pub mod wrap;

pub use ansi::{printable_width, strip, truncate_to_width};
pub use wrap::{expand_tabs, wrap_text};
