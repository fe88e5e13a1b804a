//! Visible range calculation result

use super::types::LineOffset;

/// Range of display lines visible in the current viewport.
///
/// # Invariants
/// - `start + len <= total display lines`
/// - `len <= viewport_height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    /// First visible display line (inclusive).
    pub start: LineOffset,
    /// Number of visible display lines.
    pub len: usize,
    /// Viewport height in lines.
    pub viewport_height: u16,
}

impl VisibleRange {
    /// Range starting at `start`, limited by the viewport and the list end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::visible_range::VisibleRange;
    /// # use wraplist::view_state::types::LineOffset;
    /// let range = VisibleRange::new(LineOffset::new(8), 10, 5);
    /// assert_eq!(range.len(), 2);
    /// assert_eq!(range.end(), LineOffset::new(10));
    /// ```
    pub fn new(start: LineOffset, total_lines: usize, viewport_height: u16) -> Self {
        let len = total_lines
            .saturating_sub(start.get())
            .min(viewport_height as usize);
        Self {
            start,
            len,
            viewport_height,
        }
    }

    /// Number of visible lines.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last visible line.
    pub fn end(&self) -> LineOffset {
        self.start.saturating_add(self.len)
    }

    /// Check if a specific display line is visible.
    pub fn contains(&self, line: LineOffset) -> bool {
        self.start <= line && line < self.end()
    }
}
