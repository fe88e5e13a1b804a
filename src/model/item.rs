//! Item store: the ordered items of a list and their selection flags.
//!
//! Items are opaque values that only need [`Display`]. Their display text is
//! computed once on insertion (tabs expanded) since items never change
//! after being added. Selection is a property of the entry, so it travels
//! with the item when the store is reordered.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::text::expand_tabs;

/// Recognizes "the same logical item" across reorderings.
///
/// Implemented for every `Fn(&T, &T) -> bool`, so a closure can be
/// installed directly.
///
/// # Examples
///
/// ```
/// use wraplist::model::item::ItemEquality;
///
/// let by_text = |a: &String, b: &String| a == b;
/// assert!(by_text.same(&"x".to_string(), &"x".to_string()));
/// ```
pub trait ItemEquality<T> {
    /// True when `a` and `b` denote the same item.
    fn same(&self, a: &T, b: &T) -> bool;
}

impl<T, F> ItemEquality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn same(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// One item with its selection flag and cached display text.
#[derive(Clone)]
pub struct Entry<T> {
    value: T,
    text: String,
    selected: bool,
}

impl<T: Display> Entry<T> {
    /// Wrap a value, rendering its display text once.
    pub fn new(value: T) -> Self {
        let text = expand_tabs(&value.to_string());
        Self {
            value,
            text,
            selected: false,
        }
    }
}

impl<T> Entry<T> {
    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Display text with tabs expanded. May contain line breaks and escapes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the item is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

impl<T> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("text", &self.text)
            .field("selected", &self.selected)
            .finish()
    }
}

/// Ordered sequence of entries. Exclusively owns its items.
#[derive(Debug, Clone)]
pub struct ItemStore<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Display> ItemStore<T> {
    /// Append an item at the end, unselected.
    pub fn push(&mut self, value: T) {
        self.entries.push(Entry::new(value));
    }
}

impl<T> ItemStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    /// All entries in current order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Set the selection flag of the entry at `index`. Out-of-range is ignored.
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.selected = selected;
        }
    }

    /// Flip the selection flag of the entry at `index`. Out-of-range is ignored.
    pub fn toggle_selected(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.selected = !entry.selected;
        }
    }

    /// Flip the selection flag of every entry.
    pub fn invert_selection(&mut self) {
        for entry in &mut self.entries {
            entry.selected = !entry.selected;
        }
    }

    /// True when at least one entry is selected.
    pub fn any_selected(&self) -> bool {
        self.entries.iter().any(|e| e.selected)
    }

    /// Selected values in current order.
    pub fn selected(&self) -> impl Iterator<Item = &T> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| &e.value)
    }

    /// Swap two entries, selection flags included.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    /// First index whose value `equality` considers the same as `value`.
    pub fn position(&self, value: &T, equality: &dyn ItemEquality<T>) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| equality.same(&e.value, value))
    }

    /// Stable sort by a strict-weak "less than" predicate over entries.
    ///
    /// Returns the permutation applied: `result[new] == old`.
    pub fn sort_by_less<F>(&mut self, less: F) -> Vec<usize>
    where
        F: Fn(&Entry<T>, &Entry<T>) -> bool,
    {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| {
            let (ea, eb) = (&self.entries[a], &self.entries[b]);
            if less(ea, eb) {
                Ordering::Less
            } else if less(eb, ea) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        let mut slots: Vec<Option<Entry<T>>> = self.entries.drain(..).map(Some).collect();
        self.entries = order
            .iter()
            .filter_map(|&old| slots[old].take())
            .collect();
        order
    }
}
