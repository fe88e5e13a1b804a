//! Word wrapping with terminal-width awareness.
//!
//! Converts the text of one item into display lines no wider than a target
//! width. Embedded line breaks always start a new display line. Line
//! breaking itself is done by `textwrap` with first-fit placement, so a
//! line ends at the rightmost space that keeps it within the width and a
//! word wider than the whole line is broken apart.

use std::borrow::Cow;

use textwrap::{wrap, Options, WordSeparator, WrapAlgorithm};

use super::ansi::{printable_width, tokenize, truncate_to_width};

/// Columns a tab character expands to before wrapping.
pub const TAB_WIDTH: usize = 4;

/// Stand-in for a grapheme that is wider than the whole target width.
const OVERSIZE_PLACEHOLDER: &str = "?";

/// Expand tabs so they occupy a fixed number of cells.
///
/// Terminals render a tab up to the next tab stop, which the width
/// accounting cannot predict, so tabs never reach the wrapper.
pub fn expand_tabs(text: &str) -> String {
    if text.contains('\t') {
        text.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        text.to_string()
    }
}

/// Wrap `text` into display lines of printable width at most `width`.
///
/// The result is never empty: an empty text yields one empty line.
/// A `width` of zero is treated as one.
///
/// # Examples
///
/// ```
/// # use wraplist::text::wrap::wrap_text;
/// assert_eq!(wrap_text("robert frost", 6), vec!["robert", "frost"]);
/// assert_eq!(wrap_text("a\nb", 80), vec!["a", "b"]);
/// assert_eq!(wrap_text("", 5), vec![""]);
/// assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let options = Options::new(width)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    text.split('\n')
        .flat_map(|raw| {
            let paragraph = raw.strip_suffix('\r').unwrap_or(raw);
            wrap_paragraph(paragraph, width, &options)
        })
        .collect()
}

fn wrap_paragraph(paragraph: &str, width: usize, options: &Options<'_>) -> Vec<String> {
    let paragraph = replace_oversized(paragraph, width);
    let mut lines: Vec<String> = wrap(&paragraph, options)
        .into_iter()
        .map(|line| clip(line, width))
        .collect();

    // Leading indent wider than the room left for the first word ends up
    // as a line with nothing printable on it. Fold it into the next line so
    // any escapes it carries still come first.
    if lines.len() > 1 && printable_width(&lines[0]) == 0 {
        let head = lines.remove(0);
        lines[0].insert_str(0, &head);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Replace graphemes that cannot fit on any line.
fn replace_oversized(paragraph: &str, width: usize) -> Cow<'_, str> {
    let tokens = tokenize(paragraph);
    if tokens.iter().all(|token| token.width() <= width) {
        return Cow::Borrowed(paragraph);
    }
    Cow::Owned(
        tokens
            .iter()
            .map(|token| {
                if token.width() > width {
                    OVERSIZE_PLACEHOLDER
                } else {
                    token.as_str()
                }
            })
            .collect(),
    )
}

fn clip(line: Cow<'_, str>, width: usize) -> String {
    if printable_width(&line) > width {
        truncate_to_width(&line, width)
    } else {
        line.into_owned()
    }
}
