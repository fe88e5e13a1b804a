//! Scroll-follow policy for the cursor.
//!
//! The window keeps its previous offset for as long as it can. It only moves
//! when the cursor item gets within `margin` rows of the top or bottom edge,
//! and then only far enough to restore the margin. At the true top or bottom
//! of the list the margin gives way, so the first and last items can still
//! reach the edge rows.

use super::types::LineOffset;

/// Rows kept between the cursor and the window edges by default.
pub const DEFAULT_SCROLL_MARGIN: usize = 4;

/// Cursor extent in display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSpan {
    /// Head line of the cursor item.
    pub head: LineOffset,
    /// Last line of the cursor item.
    pub tail: LineOffset,
}

/// Border-threshold scrolling over a list of display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    margin: usize,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_MARGIN)
    }
}

impl ScrollWindow {
    /// Window with the given border margin.
    pub fn new(margin: usize) -> Self {
        Self { margin }
    }

    /// Configured border margin.
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Margin actually applied for a window of `height` rows.
    ///
    /// Shrinks so that a row always remains between the two margins.
    pub fn effective_margin(&self, height: usize) -> usize {
        self.margin.min(height.saturating_sub(1) / 2)
    }

    /// Resolve the first visible display line.
    ///
    /// Guarantees `offset <= cursor.head < offset + height` and
    /// `offset <= max(0, total - height)`. When the whole list fits the
    /// offset is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::scroll::{CursorSpan, ScrollWindow};
    /// # use wraplist::view_state::types::LineOffset;
    /// let window = ScrollWindow::new(4);
    /// let cursor = CursorSpan { head: LineOffset::new(46), tail: LineOffset::new(46) };
    /// let offset = window.resolve(LineOffset::new(0), cursor, 60, 50);
    /// assert_eq!(offset, LineOffset::new(1));
    /// ```
    pub fn resolve(
        &self,
        previous: LineOffset,
        cursor: CursorSpan,
        total: usize,
        height: usize,
    ) -> LineOffset {
        if total <= height || height == 0 {
            return LineOffset::default();
        }

        let max_offset = total - height;
        let margin = self.effective_margin(height);
        let head = cursor.head.get();
        let tail = cursor.tail.get().max(head);

        let mut offset = previous.get().min(max_offset);
        // Bottom margin: the tail plus `margin` rows must stay inside.
        offset = offset.max((tail + margin + 1).saturating_sub(height));
        // Top margin wins over the bottom one for items taller than the window.
        offset = offset.min(head.saturating_sub(margin));
        // The head line itself must always be visible.
        offset = offset.max((head + 1).saturating_sub(height)).min(head);

        LineOffset::new(offset.min(max_offset))
    }
}
