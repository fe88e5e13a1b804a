//! View-state layer - Layout, scrolling, and row composition
//!
//! This module turns the items of a list into the rows of a viewport. It is
//! pure: nothing here touches the terminal.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (LineOffset, ItemIndex, ViewportDimensions, NumberingMode)
//! - `height_index`: HeightIndex - O(log n) prefix sums via Fenwick tree
//! - `layout`: LayoutIndex - wrapped segments per item, line-to-item lookup
//! - `cache`: LayoutCache - recent layouts keyed by content width
//! - `scroll`: ScrollWindow - border-margin scroll-follow policy
//! - `visible_range`: VisibleRange - display lines inside the viewport
//! - `renderer`: Row composition and ANSI output

pub mod cache;
pub mod height_index;
pub mod layout;
pub mod renderer;
pub mod scroll;
pub mod types;
pub mod visible_range;

pub use cache::LayoutCache;
pub use layout::{DisplayLine, LayoutIndex};
pub use renderer::{Glyphs, PrefixLayout, Row};
pub use scroll::{CursorSpan, ScrollWindow, DEFAULT_SCROLL_MARGIN};
pub use types::{ItemIndex, LineOffset, NumberingMode, ViewportDimensions};
pub use visible_range::VisibleRange;
