//! Pure core integration functions.
//!
//! This module contains the pure functions between raw program input and
//! output and the list: splitting input into items and formatting the
//! selection. They are testable without needing actual I/O.

use std::fmt::Display;

/// How raw input is divided into items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSeparator {
    /// One item per line (`\n` or `\r\n`).
    #[default]
    Newline,
    /// NUL-terminated items, which may contain line breaks.
    Nul,
}

/// Split raw input into items.
///
/// A trailing separator does not produce an empty last item; empty items
/// elsewhere are kept.
///
/// # Examples
///
/// ```
/// use wraplist::integration::{split_items, ItemSeparator};
///
/// assert_eq!(split_items("a\n\nb\n", ItemSeparator::Newline), vec!["a", "", "b"]);
/// assert_eq!(split_items("x\ny\0z", ItemSeparator::Nul), vec!["x\ny", "z"]);
/// ```
pub fn split_items(raw: &str, separator: ItemSeparator) -> Vec<String> {
    match separator {
        ItemSeparator::Newline => raw.lines().map(str::to_string).collect(),
        ItemSeparator::Nul => {
            let body = raw.strip_suffix('\0').unwrap_or(raw);
            if body.is_empty() {
                Vec::new()
            } else {
                body.split('\0').map(str::to_string).collect()
            }
        }
    }
}

/// Format the selected items for output: one per line, each newline-terminated.
///
/// An empty selection formats as an empty string.
pub fn format_selection<T: Display>(items: &[&T]) -> String {
    items.iter().map(|item| format!("{item}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== split_items Tests =====

    #[test]
    fn newline_split_handles_crlf() {
        assert_eq!(split_items("a\r\nb", ItemSeparator::Newline), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_items() {
        assert!(split_items("", ItemSeparator::Newline).is_empty());
        assert!(split_items("", ItemSeparator::Nul).is_empty());
        assert!(split_items("\0", ItemSeparator::Nul).is_empty());
    }

    #[test]
    fn nul_split_keeps_inner_empty_items() {
        assert_eq!(split_items("a\0\0b", ItemSeparator::Nul), vec!["a", "", "b"]);
    }

    // ===== format_selection Tests =====

    #[test]
    fn selection_is_newline_terminated() {
        let a = "one".to_string();
        let b = "two".to_string();
        assert_eq!(format_selection(&[&a, &b]), "one\ntwo\n");
    }

    #[test]
    fn empty_selection_is_empty() {
        let items: [&String; 0] = [];
        assert_eq!(format_selection(&items), "");
    }
}
