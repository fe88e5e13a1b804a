//! Ratatui widget drawing composed list rows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::text::ansi::strip;
use crate::view::styles::ListStyles;
use crate::view_state::renderer::Row;

/// Draws the rows produced by [`ListState::rows`](crate::state::ListState::rows).
///
/// Rows are drawn top to bottom and clipped to the area. Escape sequences in
/// item text are dropped; ratatui styles take their place.
#[derive(Debug, Clone, Copy)]
pub struct ListWidget<'a> {
    rows: &'a [Row<'a>],
    styles: ListStyles,
}

impl<'a> ListWidget<'a> {
    /// Widget over `rows`.
    pub fn new(rows: &'a [Row<'a>], styles: ListStyles) -> Self {
        Self { rows, styles }
    }

    fn line(&self, row: &Row<'_>) -> Line<'static> {
        let line = Line::from(vec![
            Span::styled(row.prefix.clone(), self.styles.prefix),
            Span::styled(strip(row.text), self.styles.text),
        ]);
        if row.is_cursor {
            line.patch_style(self.styles.cursor)
        } else {
            line
        }
    }
}

impl Widget for ListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, y) in self.rows.iter().zip(area.top()..area.bottom()) {
            buf.set_line(area.x, y, &self.line(row), area.width);
        }
    }
}
