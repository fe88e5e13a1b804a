//! Selectable, scrollable, soft-wrapping list.
//!
//! [`ListState`] owns the items, the cursor, the selection flags and the
//! scroll offset. Navigation and selection operations mutate it directly;
//! [`ListState::render`] lays the items out for the current viewport and
//! returns the visible block as terminal text.
//!
//! All operations work on logical item indices. Requests past either end of
//! the list are clamped, and on an empty list they do nothing.

use std::fmt::{self, Display};

use tracing::{debug, trace};

use crate::model::error::RenderError;
use crate::model::item::{Entry, ItemEquality, ItemStore};
use crate::view_state::cache::LayoutCache;
use crate::view_state::renderer::{self, Glyphs, PrefixLayout, Row, RowContext};
use crate::view_state::scroll::{CursorSpan, ScrollWindow};
use crate::view_state::types::{ItemIndex, LineOffset, NumberingMode, ViewportDimensions};
use crate::view_state::visible_range::VisibleRange;

type LessFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Render state of one list.
pub struct ListState<T> {
    items: ItemStore<T>,
    cursor: ItemIndex,
    viewport: ViewportDimensions,
    numbering: NumberingMode,
    glyphs: Glyphs,
    window: ScrollWindow,
    offset: LineOffset,
    less: Option<LessFn<T>>,
    equality: Option<Box<dyn ItemEquality<T>>>,
    layouts: LayoutCache,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: ItemStore::new(),
            cursor: ItemIndex::default(),
            viewport: ViewportDimensions::default(),
            numbering: NumberingMode::default(),
            glyphs: Glyphs::default(),
            window: ScrollWindow::default(),
            offset: LineOffset::default(),
            less: None,
            equality: None,
            layouts: LayoutCache::default(),
        }
    }
}

impl<T> fmt::Debug for ListState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("len", &self.items.len())
            .field("cursor", &self.cursor)
            .field("viewport", &self.viewport)
            .field("numbering", &self.numbering)
            .field("offset", &self.offset)
            .field("custom_less", &self.less.is_some())
            .field("custom_equality", &self.equality.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Display> ListState<T> {
    /// Append one item at the end of the list.
    pub fn add_item(&mut self, value: T) {
        self.items.push(value);
        if let Some(entry) = self.items.entries().last() {
            self.layouts.push_item(entry.text());
        }
    }

    /// Append items in order.
    pub fn add_items(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.add_item(value);
        }
    }

    /// List holding `values`, with the given viewport.
    pub fn with_items(values: impl IntoIterator<Item = T>, width: u16, height: u16) -> Self {
        let mut state = Self::new();
        state.set_viewport(ViewportDimensions::new(width, height));
        state.add_items(values);
        state
    }
}

impl<T> ListState<T> {
    /// Empty list with a zero-sized viewport.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All entries in current order.
    pub fn entries(&self) -> &[Entry<T>] {
        self.items.entries()
    }

    /// Item under the cursor.
    pub fn cursor(&self) -> ItemIndex {
        self.cursor
    }

    /// Value under the cursor, `None` on an empty list.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor.get()).map(Entry::value)
    }

    /// First visible display line as of the last render.
    pub fn scroll_offset(&self) -> LineOffset {
        self.offset
    }

    /// Current viewport.
    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    /// Current numbering mode.
    pub fn numbering(&self) -> NumberingMode {
        self.numbering
    }

    /// Markers in use.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Whether `index` refers to an existing item.
    pub fn in_bounds(&self, index: isize) -> bool {
        usize::try_from(index).is_ok_and(|i| i < self.items.len())
    }

    // ===== Configuration =====

    /// Replace the viewport dimensions.
    pub fn set_viewport(&mut self, viewport: ViewportDimensions) {
        self.viewport = viewport;
    }

    /// Replace the viewport width.
    pub fn set_width(&mut self, width: u16) {
        self.viewport.width = width;
    }

    /// Replace the viewport height.
    pub fn set_height(&mut self, height: u16) {
        self.viewport.height = height;
    }

    /// Choose absolute or relative line numbers.
    pub fn set_numbering(&mut self, numbering: NumberingMode) {
        self.numbering = numbering;
    }

    /// Flip between absolute and relative line numbers.
    pub fn toggle_numbering(&mut self) {
        self.numbering = self.numbering.toggled();
    }

    /// Replace the markers. Invalidates the cached layout.
    pub fn set_glyphs(&mut self, glyphs: Glyphs) {
        self.glyphs = glyphs;
        self.layouts.invalidate();
    }

    /// Rows kept between the cursor and the window edges while scrolling.
    pub fn set_scroll_margin(&mut self, margin: usize) {
        self.window = ScrollWindow::new(margin);
    }

    /// Install the ordering used by [`ListState::sort`].
    pub fn set_less<F>(&mut self, less: F)
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.less = Some(Box::new(less));
    }

    /// Install the predicate that recognizes the same item by value.
    ///
    /// Without one, items are identified by position only.
    pub fn set_equals<E>(&mut self, equality: E)
    where
        E: ItemEquality<T> + 'static,
    {
        self.equality = Some(Box::new(equality));
    }

    // ===== Navigation =====

    /// Move the cursor by `delta` items, clamped to the list. No wraparound.
    pub fn move_by(&mut self, delta: isize) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        let target = self.cursor.get().saturating_add_signed(delta).min(last);
        self.cursor = ItemIndex::new(target);
    }

    /// Put the cursor on `index`, clamped to the list.
    pub fn jump_to(&mut self, index: usize) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.cursor = ItemIndex::new(index.min(last));
        }
    }

    /// Cursor to the first item.
    pub fn top(&mut self) {
        self.jump_to(0);
    }

    /// Cursor to the last item.
    pub fn bottom(&mut self) {
        self.jump_to(usize::MAX);
    }

    // ===== Selection =====

    /// Flip the selection of `count` items starting at the cursor.
    ///
    /// The cursor does not move.
    pub fn toggle_select(&mut self, count: usize) {
        for index in self.span_from_cursor(count) {
            self.items.toggle_selected(index);
        }
    }

    /// Set the selection of `count` items starting at the cursor to `value`.
    pub fn mark_selected(&mut self, count: usize, value: bool) {
        for index in self.span_from_cursor(count) {
            self.items.set_selected(index, value);
        }
    }

    /// Flip the selection of every item.
    pub fn invert_selection(&mut self) {
        self.items.invert_selection();
    }

    /// Selected values in current order.
    pub fn get_selected(&self) -> Vec<&T> {
        self.items.selected().collect()
    }

    fn span_from_cursor(&self, count: usize) -> std::ops::Range<usize> {
        let start = self.cursor.get().min(self.items.len());
        start..start.saturating_add(count).min(self.items.len())
    }

    // ===== Ordering =====

    /// Move the item under the cursor by `delta` positions, clamped.
    ///
    /// The cursor follows the item.
    pub fn move_item(&mut self, delta: isize) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        let from = self.cursor.get();
        let to = from.saturating_add_signed(delta).min(last);

        let mut at = from;
        while at != to {
            let next = if to > at { at + 1 } else { at - 1 };
            self.items.swap(at, next);
            self.layouts.swap(ItemIndex::new(at), ItemIndex::new(next));
            at = next;
        }
        self.cursor = ItemIndex::new(to);
    }

    /// Value lookup with the installed equality predicate.
    ///
    /// `None` when no predicate is installed or nothing matches.
    pub fn index_of(&self, value: &T) -> Option<ItemIndex> {
        let equality = self.equality.as_deref()?;
        self.items.position(value, equality).map(ItemIndex::new)
    }

    /// Put the cursor on the item equal to `value`.
    ///
    /// Returns false, leaving the cursor alone, when nothing matches.
    pub fn focus_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Stable sort with the installed ordering, or by display text.
    ///
    /// Selection flags travel with their items. The cursor stays on its
    /// item: found again by value when an equality predicate is installed,
    /// otherwise followed through the permutation. The previous order is
    /// not kept.
    pub fn sort(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let order = match &self.less {
            Some(less) => self.items.sort_by_less(|a, b| less(a.value(), b.value())),
            None => self.items.sort_by_less(|a, b| a.text() < b.text()),
        };

        let followed = order
            .iter()
            .position(|&old| old == self.cursor.get())
            .unwrap_or_default();
        let refound = self.equality.as_deref().and_then(|equality| {
            let value = self.items.get(followed)?.value();
            self.items.position(value, equality)
        });
        self.cursor = ItemIndex::new(refound.unwrap_or(followed));
        self.layouts.invalidate();

        debug!(items = self.items.len(), cursor = self.cursor.get(), "items sorted");
    }

    // ===== Rendering =====

    /// Render the visible block as terminal text.
    ///
    /// One line per visible display line, joined by `\n`, no trailing
    /// newline. Each line is at most the viewport width; the cursor item's
    /// lines are in inverse video. An empty list renders as an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ZeroViewport`] when the viewport has zero
    /// width or height. Nothing is rendered in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use wraplist::state::list_state::ListState;
    ///
    /// let mut list = ListState::with_items(["robert frost"], 10, 2);
    /// assert_eq!(
    ///     list.render().unwrap(),
    ///     "\x1b[7m0 ╭>robert\x1b[0m\n\x1b[7m  │ frost\x1b[0m"
    /// );
    /// ```
    pub fn render(&mut self) -> Result<String, RenderError> {
        let width = usize::from(self.viewport.width);
        let rows = self.rows()?;
        Ok(renderer::render_ansi(&rows, width))
    }

    /// Compose the visible rows without turning them into text.
    ///
    /// Updates the scroll offset exactly like [`ListState::render`].
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ZeroViewport`] when the viewport has zero
    /// width or height.
    pub fn rows(&mut self) -> Result<Vec<Row<'_>>, RenderError> {
        self.viewport.validate()?;
        if self.items.is_empty() {
            return Ok(Vec::new());
        }

        let (range, prefix) = self.place();
        let width = usize::from(self.viewport.width);
        let items = &self.items;
        let layout = self.layouts.layout(prefix.content_width(width), || {
            items.entries().iter().map(Entry::text)
        });
        let ctx = RowContext {
            glyphs: &self.glyphs,
            prefix,
            cursor: self.cursor,
            numbering: self.numbering,
        };
        Ok(renderer::compose_rows(layout, range, &ctx, |item| {
            items.get(item.get()).is_some_and(Entry::is_selected)
        }))
    }

    /// Settle the number field width and the scroll offset together.
    ///
    /// The text width depends on the number field, which depends on the
    /// labels in view, which depend on the offset. Starting from the
    /// narrowest field, widen it until the visible labels fit. The width
    /// only grows, so this stops after a few rounds.
    fn place(&mut self) -> (VisibleRange, PrefixLayout) {
        let width = usize::from(self.viewport.width);
        let height = self.viewport.height;
        let any_selected = self.items.any_selected();
        let items = &self.items;
        let mut number_width = 1;

        loop {
            let prefix = PrefixLayout::new(&self.glyphs, number_width, any_selected);
            let layout = self.layouts.layout(prefix.content_width(width), || {
                items.entries().iter().map(Entry::text)
            });

            let cursor = CursorSpan {
                head: layout.head_line(self.cursor),
                tail: layout.tail_line(self.cursor),
            };
            let total = layout.total_lines();
            let offset = self
                .window
                .resolve(self.offset, cursor, total, usize::from(height));
            let range = VisibleRange::new(offset, total, height);
            let needed = renderer::label_width(layout, range, self.cursor, self.numbering);

            if needed <= number_width {
                if offset != self.offset {
                    trace!(from = self.offset.get(), to = offset.get(), total, "scroll offset changed");
                }
                self.offset = offset;
                return (range, prefix);
            }
            number_width = needed;
        }
    }
}

#[cfg(test)]
#[path = "list_state_tests.rs"]
mod tests;
