//! Core view-state newtypes

use crate::model::error::RenderError;

/// Absolute display-line offset from the start of the list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineOffset(usize);

impl LineOffset {
    /// Create a new LineOffset from a raw value.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Add an amount to this offset, saturating at usize::MAX.
    pub fn saturating_add(&self, amount: usize) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Subtract an amount from this offset, saturating at 0.
    pub fn saturating_sub(&self, amount: usize) -> Self {
        Self(self.0.saturating_sub(amount))
    }
}

/// Logical item index within the list. 0-indexed, and displayed 0-based
/// in the line-number column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the next item index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the previous item index, saturating at 0.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Signed distance from `origin` to this index.
    pub fn distance_from(&self, origin: ItemIndex) -> isize {
        if self.0 >= origin.0 {
            (self.0 - origin.0) as isize
        } else {
            -((origin.0 - self.0) as isize)
        }
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Viewport dimensions in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are at least one cell.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ZeroViewport`] when width or height is zero.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            Err(RenderError::ZeroViewport {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(())
        }
    }
}

/// How the line-number column labels rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingMode {
    /// Position of the item within the whole list.
    #[default]
    Absolute,
    /// Signed distance from the cursor; the cursor row keeps its absolute position.
    Relative,
}

impl NumberingMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            NumberingMode::Absolute => NumberingMode::Relative,
            NumberingMode::Relative => NumberingMode::Absolute,
        }
    }

    /// Label for the head row of `item` given the cursor position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::types::{ItemIndex, NumberingMode};
    /// let cursor = ItemIndex::new(5);
    /// assert_eq!(NumberingMode::Absolute.label(ItemIndex::new(3), cursor), "3");
    /// assert_eq!(NumberingMode::Relative.label(ItemIndex::new(3), cursor), "-2");
    /// assert_eq!(NumberingMode::Relative.label(ItemIndex::new(7), cursor), "+2");
    /// assert_eq!(NumberingMode::Relative.label(cursor, cursor), "5");
    /// ```
    pub fn label(self, item: ItemIndex, cursor: ItemIndex) -> String {
        match self {
            NumberingMode::Absolute => item.get().to_string(),
            NumberingMode::Relative if item == cursor => item.get().to_string(),
            NumberingMode::Relative => format!("{:+}", item.distance_from(cursor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod line_offset {
        use super::*;

        #[test]
        fn new_creates_offset() {
            let offset = LineOffset::new(42);
            assert_eq!(offset.get(), 42);
        }

        #[test]
        fn default_is_zero() {
            assert_eq!(LineOffset::default().get(), 0);
        }

        #[test]
        fn saturating_add_at_max() {
            let offset = LineOffset::new(usize::MAX);
            assert_eq!(offset.saturating_add(100).get(), usize::MAX);
        }

        #[test]
        fn saturating_sub_near_zero() {
            let offset = LineOffset::new(2);
            assert_eq!(offset.saturating_sub(5).get(), 0);
        }

        #[test]
        fn ordering_works() {
            assert!(LineOffset::new(5) < LineOffset::new(10));
        }
    }

    mod item_index {
        use super::*;

        #[test]
        fn next_and_prev() {
            let idx = ItemIndex::new(3);
            assert_eq!(idx.next(), ItemIndex::new(4));
            assert_eq!(idx.prev(), ItemIndex::new(2));
        }

        #[test]
        fn prev_saturates_at_zero() {
            assert_eq!(ItemIndex::new(0).prev(), ItemIndex::new(0));
        }

        #[test]
        fn distance_is_signed() {
            let origin = ItemIndex::new(10);
            assert_eq!(ItemIndex::new(13).distance_from(origin), 3);
            assert_eq!(ItemIndex::new(7).distance_from(origin), -3);
            assert_eq!(origin.distance_from(origin), 0);
        }

        #[test]
        fn from_usize() {
            let idx: ItemIndex = 9.into();
            assert_eq!(idx.get(), 9);
        }
    }

    mod viewport_dimensions {
        use super::*;

        #[test]
        fn new_sets_fields() {
            let dims = ViewportDimensions::new(80, 24);
            assert_eq!(dims.width, 80);
            assert_eq!(dims.height, 24);
        }

        #[test]
        fn validate_accepts_one_by_one() {
            assert!(ViewportDimensions::new(1, 1).validate().is_ok());
        }

        #[test]
        fn validate_rejects_zero_width() {
            let err = ViewportDimensions::new(0, 1).validate().unwrap_err();
            assert_eq!(err, RenderError::ZeroViewport { width: 0, height: 1 });
        }

        #[test]
        fn validate_rejects_zero_height() {
            let err = ViewportDimensions::new(1, 0).validate().unwrap_err();
            assert_eq!(err, RenderError::ZeroViewport { width: 1, height: 0 });
        }
    }

    mod numbering_mode {
        use super::*;

        #[test]
        fn default_is_absolute() {
            assert_eq!(NumberingMode::default(), NumberingMode::Absolute);
        }

        #[test]
        fn toggled_twice_is_identity() {
            let mode = NumberingMode::Relative;
            assert_eq!(mode.toggled().toggled(), mode);
        }

        #[test]
        fn relative_label_at_cursor_is_absolute() {
            let cursor = ItemIndex::new(12);
            assert_eq!(NumberingMode::Relative.label(cursor, cursor), "12");
        }
    }
}
