//! Row composition and ANSI output.
//!
//! Each visible display line becomes one output row, composed left to right:
//!
//! ```text
//! <number> <glyph><cursor><selection><text>
//!  45      ╭      >       *          item text
//! ```
//!
//! - number: right-aligned to the widest label among the visible rows,
//!   blank on continuation rows
//! - glyph: head glyph on an item's first row, continuation glyph after
//! - cursor: the cursor marker on the cursor item's head row, spaces elsewhere
//! - selection: present only while some marker has a width, padded to the
//!   wider of the selected and unselected markers
//!
//! Rows are clipped to the viewport width, never padded. Every row of the
//! cursor item is wrapped in inverse video.

use super::layout::LayoutIndex;
use super::types::{ItemIndex, NumberingMode};
use super::visible_range::VisibleRange;
use crate::text::{printable_width, truncate_to_width};

/// SGR sequence that starts inverse video.
pub const INVERSE_ON: &str = "\x1b[7m";
/// SGR sequence that resets all attributes.
pub const STYLE_RESET: &str = "\x1b[0m";
/// Resets that may appear inside item text and also clear inverse video.
const INNER_RESETS: [&str; 2] = [STYLE_RESET, "\x1b[m"];

/// Markers drawn in the row prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Shown on the head row of the cursor item.
    pub cursor_marker: String,
    /// Shown on the head row of selected items.
    pub selected_marker: String,
    /// Shown on the head row of unselected items.
    pub unselected_marker: String,
    /// Glyph on the first row of every item.
    pub head_glyph: String,
    /// Glyph on wrapped rows after the first.
    pub continuation_glyph: String,
    /// Whether the head/continuation glyph column is drawn at all.
    pub show_item_glyphs: bool,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            cursor_marker: ">".to_string(),
            selected_marker: "*".to_string(),
            unselected_marker: String::new(),
            head_glyph: "╭".to_string(),
            continuation_glyph: "│".to_string(),
            show_item_glyphs: true,
        }
    }
}

impl Glyphs {
    /// Checkbox markers without the glyph column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::renderer::Glyphs;
    /// let glyphs = Glyphs::checkboxes();
    /// assert_eq!(glyphs.selected_marker, "[x]");
    /// assert!(!glyphs.show_item_glyphs);
    /// ```
    pub fn checkboxes() -> Self {
        Self {
            selected_marker: "[x]".to_string(),
            unselected_marker: "[ ]".to_string(),
            show_item_glyphs: false,
            ..Self::default()
        }
    }

    fn glyph_width(&self) -> usize {
        if self.show_item_glyphs {
            printable_width(&self.head_glyph).max(printable_width(&self.continuation_glyph))
        } else {
            0
        }
    }

    /// Width of the selection column.
    ///
    /// Only the unselected marker counts while nothing is selected.
    fn selection_width(&self, any_selected: bool) -> usize {
        let unselected = printable_width(&self.unselected_marker);
        if any_selected {
            unselected.max(printable_width(&self.selected_marker))
        } else {
            unselected
        }
    }
}

/// Column widths of the row prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixLayout {
    /// Width of the number field (excluding the following space).
    pub number_width: usize,
    /// Width of the head/continuation glyph column.
    pub glyph_width: usize,
    /// Width of the cursor marker column.
    pub cursor_width: usize,
    /// Width of the selection column.
    pub selection_width: usize,
}

impl PrefixLayout {
    /// Prefix for the given glyphs and number field width.
    pub fn new(glyphs: &Glyphs, number_width: usize, any_selected: bool) -> Self {
        Self {
            number_width,
            glyph_width: glyphs.glyph_width(),
            cursor_width: printable_width(&glyphs.cursor_marker),
            selection_width: glyphs.selection_width(any_selected),
        }
    }

    /// Total prefix width, including the space after the number.
    pub fn width(&self) -> usize {
        self.number_width + 1 + self.glyph_width + self.cursor_width + self.selection_width
    }

    /// Columns left for item text in a viewport `viewport_width` wide. At least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::renderer::{Glyphs, PrefixLayout};
    /// let prefix = PrefixLayout::new(&Glyphs::default(), 1, false);
    /// assert_eq!(prefix.width(), 4);
    /// assert_eq!(prefix.content_width(10), 6);
    /// assert_eq!(prefix.content_width(2), 1);
    /// ```
    pub fn content_width(&self, viewport_width: usize) -> usize {
        viewport_width.saturating_sub(self.width()).max(1)
    }
}

/// Per-render inputs shared by every row.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'g> {
    /// Markers to draw.
    pub glyphs: &'g Glyphs,
    /// Column widths.
    pub prefix: PrefixLayout,
    /// Item under the cursor.
    pub cursor: ItemIndex,
    /// Label style of the number field.
    pub numbering: NumberingMode,
}

/// One composed output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Item that owns the row.
    pub item: ItemIndex,
    /// True on every row of the cursor item.
    pub is_cursor: bool,
    /// True on wrapped rows after the head row.
    pub is_continuation: bool,
    /// Composed prefix (number, glyph, cursor, selection).
    pub prefix: String,
    /// Wrapped text segment.
    pub text: &'a str,
}

impl Row<'_> {
    /// Row as terminal text clipped to `width` columns.
    ///
    /// Cursor rows are wrapped in inverse video, re-enabled after every
    /// reset the item text carries.
    pub fn to_ansi(&self, width: usize) -> String {
        let mut line = String::with_capacity(self.prefix.len() + self.text.len());
        line.push_str(&self.prefix);
        line.push_str(self.text);
        let mut line = truncate_to_width(&line, width);

        if self.is_cursor {
            for reset in INNER_RESETS {
                if line.contains(reset) {
                    line = line.replace(reset, &format!("{reset}{INVERSE_ON}"));
                }
            }
            format!("{INVERSE_ON}{line}{STYLE_RESET}")
        } else {
            line
        }
    }
}

/// Widest number label among the head rows in `range`. 0 when there are none.
pub fn label_width(
    layout: &LayoutIndex,
    range: VisibleRange,
    cursor: ItemIndex,
    numbering: NumberingMode,
) -> usize {
    layout
        .lines(range.start, range.len())
        .filter(|line| !line.is_continuation())
        .map(|line| numbering.label(line.item, cursor).len())
        .max()
        .unwrap_or(0)
}

/// Compose the rows for `range`.
///
/// `is_selected` reports the selection flag of an item.
pub fn compose_rows<'a>(
    layout: &'a LayoutIndex,
    range: VisibleRange,
    ctx: &RowContext<'_>,
    is_selected: impl Fn(ItemIndex) -> bool,
) -> Vec<Row<'a>> {
    layout
        .lines(range.start, range.len())
        .map(|line| {
            let is_cursor = line.item == ctx.cursor;
            let head = !line.is_continuation();
            let prefix = compose_prefix(ctx, line.item, head, is_cursor, head && is_selected(line.item));
            Row {
                item: line.item,
                is_cursor,
                is_continuation: !head,
                prefix,
                text: line.text,
            }
        })
        .collect()
}

fn compose_prefix(
    ctx: &RowContext<'_>,
    item: ItemIndex,
    head: bool,
    is_cursor: bool,
    selected: bool,
) -> String {
    let PrefixLayout {
        number_width,
        glyph_width,
        cursor_width,
        selection_width,
    } = ctx.prefix;
    let glyphs = ctx.glyphs;
    let mut prefix = String::new();

    if head {
        let label = ctx.numbering.label(item, ctx.cursor);
        prefix.push_str(&format!("{label:>number_width$} "));
    } else {
        prefix.push_str(&" ".repeat(number_width + 1));
    }

    if glyph_width > 0 {
        let glyph = if head {
            &glyphs.head_glyph
        } else {
            &glyphs.continuation_glyph
        };
        push_padded(&mut prefix, glyph, glyph_width);
    }

    if head && is_cursor {
        push_padded(&mut prefix, &glyphs.cursor_marker, cursor_width);
    } else {
        push_padded(&mut prefix, "", cursor_width);
    }

    if selection_width > 0 {
        let marker = match (head, selected) {
            (false, _) => "",
            (true, true) => glyphs.selected_marker.as_str(),
            (true, false) => glyphs.unselected_marker.as_str(),
        };
        push_padded(&mut prefix, marker, selection_width);
    }

    prefix
}

/// Push `text` and pad it with spaces to `width` columns.
fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let used = printable_width(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
}

/// Join rows into the rendered block: one line per row, no trailing newline.
pub fn render_ansi(rows: &[Row<'_>], width: usize) -> String {
    rows.iter()
        .map(|row| row.to_ansi(width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
