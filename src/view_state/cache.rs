//! Bounded cache of layouts keyed by content width.
//!
//! The row prefix depends on the width of the number field, which in turn
//! depends on which rows are visible, so one render may lay the list out at
//! two or three neighbouring widths. Keeping the few most recent layouts
//! makes every render after the first a cache hit.

use tracing::debug;

use super::layout::LayoutIndex;
use super::types::ItemIndex;

/// Default number of layouts kept.
pub const DEFAULT_LAYOUT_CAPACITY: usize = 4;

/// Most-recently-used layouts, newest first.
#[derive(Debug, Clone)]
pub struct LayoutCache {
    layouts: Vec<LayoutIndex>,
    capacity: usize,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT_CAPACITY)
    }
}

impl LayoutCache {
    /// Create an empty cache. A capacity of 0 uses the default.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_LAYOUT_CAPACITY
        } else {
            capacity
        };
        Self {
            layouts: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Layout for `content_width`, built from `texts` on a miss.
    ///
    /// A hit moves the layout to the front; a miss evicts the least
    /// recently used layout when the cache is full.
    pub fn layout<'t, I, F>(&mut self, content_width: usize, texts: F) -> &LayoutIndex
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = &'t str>,
    {
        let content_width = content_width.max(1);
        match self
            .layouts
            .iter()
            .position(|l| l.content_width() == content_width)
        {
            Some(0) => {}
            Some(pos) => {
                let layout = self.layouts.remove(pos);
                self.layouts.insert(0, layout);
            }
            None => {
                let layout = LayoutIndex::build(texts(), content_width);
                debug!(
                    content_width,
                    items = layout.item_count(),
                    total_lines = layout.total_lines(),
                    "layout rebuilt"
                );
                self.layouts.truncate(self.capacity - 1);
                self.layouts.insert(0, layout);
            }
        }
        &self.layouts[0]
    }

    /// Extend every cached layout with an appended item.
    pub fn push_item(&mut self, text: &str) {
        for layout in &mut self.layouts {
            layout.push(text);
        }
    }

    /// Swap two items in every cached layout.
    pub fn swap(&mut self, a: ItemIndex, b: ItemIndex) {
        for layout in &mut self.layouts {
            layout.swap(a, b);
        }
    }

    /// Drop every cached layout. The next lookup rebuilds.
    pub fn invalidate(&mut self) {
        self.layouts.clear();
    }

    /// Number of cached layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Check if the cache holds no layouts.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
