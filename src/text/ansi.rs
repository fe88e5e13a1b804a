//! Escape-aware text measurement.
//!
//! Item text may carry SGR color/style sequences. They pass through
//! untouched but never count toward the printable width. Stripping is left
//! to `strip-ansi-escapes` and line breaking to `textwrap`; what stays here
//! is the one measure that both the wrap guard and the clip agree on.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// A piece of item text as seen by the width accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Terminal escape sequence (CSI, OSC or a two-byte escape). Zero width.
    Escape(&'a str),
    /// One grapheme cluster together with its printable cell width.
    Grapheme(&'a str, usize),
}

impl<'a> Token<'a> {
    /// Printable width in terminal cells.
    pub fn width(&self) -> usize {
        match self {
            Token::Escape(_) => 0,
            Token::Grapheme(_, width) => *width,
        }
    }

    /// Raw text of the token.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Escape(s) | Token::Grapheme(s, _) => *s,
        }
    }

}

/// Split text into escape sequences and grapheme clusters.
///
/// # Examples
///
/// ```
/// # use wraplist::text::ansi::{tokenize, Token};
/// let tokens = tokenize("\x1b[1mhi");
/// assert_eq!(tokens[0], Token::Escape("\x1b[1m"));
/// assert_eq!(tokens[1], Token::Grapheme("h", 1));
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find('\x1b') {
            Some(0) => {
                let len = escape_len(rest);
                tokens.push(Token::Escape(&rest[..len]));
                rest = &rest[len..];
            }
            Some(pos) => {
                push_graphemes(&rest[..pos], &mut tokens);
                rest = &rest[pos..];
            }
            None => {
                push_graphemes(rest, &mut tokens);
                break;
            }
        }
    }

    tokens
}

fn push_graphemes<'a>(plain: &'a str, tokens: &mut Vec<Token<'a>>) {
    tokens.extend(
        plain
            .graphemes(true)
            .map(|g| Token::Grapheme(g, grapheme_width(g))),
    );
}

/// Byte length of the escape sequence at the start of `s` (which starts with ESC).
fn escape_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.get(1) {
        // CSI: parameter and intermediate bytes, then a final byte in 0x40..=0x7e
        Some(b'[') => bytes[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map_or(bytes.len(), |pos| pos + 3),
        // OSC: terminated by BEL or ST (ESC \)
        Some(b']') => {
            let mut i = 2;
            while i < bytes.len() {
                if bytes[i] == BEL {
                    return i + 1;
                }
                if bytes[i] == ESC && bytes.get(i + 1) == Some(&b'\\') {
                    return i + 2;
                }
                i += 1;
            }
            bytes.len()
        }
        Some(b) if b.is_ascii() => 2,
        _ => 1,
    }
}

/// Control characters take no cells.
fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().any(char::is_control) {
        0
    } else {
        grapheme.width()
    }
}

/// Printable width of `text` in terminal cells, ignoring escape sequences.
///
/// # Examples
///
/// ```
/// # use wraplist::text::ansi::printable_width;
/// assert_eq!(printable_width("\x1b[7m0 ╭>\x1b[0m"), 4);
/// assert_eq!(printable_width("日本"), 4);
/// ```
pub fn printable_width(text: &str) -> usize {
    tokenize(text).iter().map(Token::width).sum()
}

/// Remove all escape sequences from `text`.
pub fn strip(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}

/// Clip `text` so its printable width is at most `max_width`.
///
/// Escape sequences are kept wherever they occur so that style resets
/// after the cut still reach the terminal.
///
/// # Examples
///
/// ```
/// # use wraplist::text::ansi::truncate_to_width;
/// assert_eq!(truncate_to_width("abcdef", 3), "abc");
/// assert_eq!(truncate_to_width("a\x1b[1mbc\x1b[0m", 2), "a\x1b[1mb\x1b[0m");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut width = 0;
    let mut clipped = false;

    for token in tokenize(text) {
        match token {
            Token::Escape(s) => out.push_str(s),
            Token::Grapheme(s, w) => {
                if clipped || width + w > max_width {
                    clipped = true;
                    continue;
                }
                out.push_str(s);
                width += w;
            }
        }
    }

    out
}
