//! Layout index: items to display lines and back.
//!
//! Every item is wrapped once to the content width. The wrapped segments
//! are kept per item, and a [`HeightIndex`] over the segment counts gives
//! the head line of any item and the owner of any display line in
//! logarithmic time.
//!
//! The index is pure derived state. It is rebuilt whenever the content
//! width or the item order changes; appending items extends it in place.

use super::height_index::HeightIndex;
use super::types::{ItemIndex, LineOffset};
use crate::text::wrap_text;

/// One row of the laid-out list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLine<'a> {
    /// Item that owns this row.
    pub item: ItemIndex,
    /// Row within the item. 0 is the head line.
    pub line_in_item: usize,
    /// Wrapped text segment for this row.
    pub text: &'a str,
}

impl DisplayLine<'_> {
    /// True for the wrapped rows after an item's head line.
    pub fn is_continuation(&self) -> bool {
        self.line_in_item > 0
    }
}

/// Wrapped segments of every item plus their cumulative heights.
#[derive(Debug, Clone)]
pub struct LayoutIndex {
    content_width: usize,
    segments: Vec<Vec<String>>,
    heights: HeightIndex,
}

impl LayoutIndex {
    /// Lay out `texts` at `content_width` columns (at least 1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::layout::LayoutIndex;
    /// # use wraplist::view_state::types::{ItemIndex, LineOffset};
    /// let layout = LayoutIndex::build(["robert frost", "x"], 6);
    /// assert_eq!(layout.total_lines(), 3);
    /// assert_eq!(layout.head_line(ItemIndex::new(1)), LineOffset::new(2));
    /// ```
    pub fn build<'a>(texts: impl IntoIterator<Item = &'a str>, content_width: usize) -> Self {
        let texts = texts.into_iter();
        let mut layout = Self {
            content_width: content_width.max(1),
            segments: Vec::with_capacity(texts.size_hint().0),
            heights: HeightIndex::new(texts.size_hint().0),
        };
        for text in texts {
            layout.push(text);
        }
        layout
    }

    /// Lay out one more item at the end.
    pub fn push(&mut self, text: &str) {
        let lines = wrap_text(text, self.content_width);
        self.heights.push(lines.len());
        self.segments.push(lines);
    }

    /// Swap the layouts of two items.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: ItemIndex, b: ItemIndex) {
        let (a, b) = (a.get(), b.get());
        self.segments.swap(a, b);
        self.heights.set(a, self.segments[a].len());
        self.heights.set(b, self.segments[b].len());
    }

    /// Width the items were wrapped to.
    pub fn content_width(&self) -> usize {
        self.content_width
    }

    /// Number of laid-out items.
    pub fn item_count(&self) -> usize {
        self.segments.len()
    }

    /// Total number of display lines.
    pub fn total_lines(&self) -> usize {
        self.heights.total()
    }

    /// Number of display lines of `item`. 0 when out of range.
    pub fn height(&self, item: ItemIndex) -> usize {
        self.segments.get(item.get()).map_or(0, Vec::len)
    }

    /// Wrapped segments of `item`. Empty when out of range.
    pub fn segments(&self, item: ItemIndex) -> &[String] {
        self.segments.get(item.get()).map_or(&[][..], Vec::as_slice)
    }

    /// First display line of `item`.
    pub fn head_line(&self, item: ItemIndex) -> LineOffset {
        LineOffset::new(self.heights.start_of(item.get().min(self.item_count())))
    }

    /// Last display line of `item`.
    pub fn tail_line(&self, item: ItemIndex) -> LineOffset {
        let head = self.head_line(item);
        head.saturating_add(self.height(item).saturating_sub(1))
    }

    /// Owner and text of a display line, `None` past the end.
    pub fn locate(&self, line: LineOffset) -> Option<DisplayLine<'_>> {
        let item = self.heights.lower_bound(line.get())?;
        let line_in_item = line.get() - self.heights.start_of(item);
        self.segments[item]
            .get(line_in_item)
            .map(|text| DisplayLine {
                item: ItemIndex::new(item),
                line_in_item,
                text: text.as_str(),
            })
    }

    /// Display lines `start..start + count`, stopping at the end of the list.
    pub fn lines(&self, start: LineOffset, count: usize) -> impl Iterator<Item = DisplayLine<'_>> {
        let first = self.locate(start);
        let (item, skip) = first.map_or((self.item_count(), 0), |l| {
            (l.item.get(), l.line_in_item)
        });

        self.segments[item..]
            .iter()
            .enumerate()
            .flat_map(move |(offset, segments)| {
                segments
                    .iter()
                    .enumerate()
                    .map(move |(line_in_item, text)| DisplayLine {
                        item: ItemIndex::new(item + offset),
                        line_in_item,
                        text: text.as_str(),
                    })
            })
            .skip(skip)
            .take(count)
    }
}
