//! HeightIndex - O(log n) prefix sums and lower_bound via Fenwick tree
//!
//! Maps items to runs of display lines: the height of an item is the number
//! of display lines it wraps into, the prefix sum before it is its head line.
//!
//! # Complexity
//!
//! - `set`: O(log n)
//! - `prefix_sum`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `push`: O(log n) amortized
//! - `total`: O(log n)
//! - `len`: O(1)
//! - `clear`: O(capacity)

/// HeightIndex wraps a Fenwick tree for O(log n) prefix sum queries and updates.
///
/// Maintains cumulative heights for a sequence of items, supporting:
/// - Setting individual item heights
/// - Computing prefix sums (cumulative height up to index)
/// - Binary search for item by display line (lower_bound)
#[derive(Debug, Clone)]
pub struct HeightIndex {
    /// Fenwick tree backing storage (1-indexed internally, but we expose 0-indexed API)
    tree: Vec<isize>,
    /// Number of valid items (len <= tree.len())
    len: usize,
}

impl HeightIndex {
    /// Creates a new HeightIndex with the given initial capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::new(100);
    /// assert_eq!(index.len(), 0);
    /// assert_eq!(index.total(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            len: 0,
        }
    }

    /// Builds an index from a sequence of heights.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights([2, 1, 3]);
    /// assert_eq!(index.total(), 6);
    /// assert_eq!(index.height(2), 3);
    /// ```
    pub fn from_heights(heights: impl IntoIterator<Item = usize>) -> Self {
        let heights = heights.into_iter();
        let mut index = Self::new(heights.size_hint().0);
        for height in heights {
            index.push(height);
        }
        index
    }

    /// Sets the height at the given index.
    ///
    /// Computes the delta from the current height and updates the Fenwick tree.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, height: usize) {
        let current_height = self.height(index);
        let delta = height as isize - current_height as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Height of a single item.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height(&self, index: usize) -> usize {
        if index == 0 {
            self.prefix_sum(0)
        } else {
            self.prefix_sum(index) - self.prefix_sum(index - 1)
        }
    }

    /// Returns the cumulative height up to and including the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(10);
    /// index.push(3);
    /// index.push(4);
    /// index.push(5);
    /// assert_eq!(index.prefix_sum(0), 3);
    /// assert_eq!(index.prefix_sum(1), 7);
    /// assert_eq!(index.prefix_sum(2), 12);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len,
            "index {} out of bounds (len: {})",
            index,
            self.len
        );

        let sum = fenwick::array::prefix_sum(&self.tree, index);
        sum.max(0) as usize
    }

    /// Cumulative height of all items before `index` (the first line of `index`).
    ///
    /// Accepts `index == len()`, which yields the total.
    pub fn start_of(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            self.prefix_sum(index - 1)
        }
    }

    /// Binary search for the first index where `prefix_sum(index) > value`.
    ///
    /// Returns the index of the item containing the given display line.
    ///
    /// # Returns
    ///
    /// - `Some(index)` if there exists an index where `prefix_sum(index) > value`
    /// - `None` if `value >= total()` or the index is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(10);
    /// index.push(1);  // [0..1)
    /// index.push(2);  // [1..3)
    /// index.push(1);  // [3..4)
    ///
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(1), Some(1));
    /// assert_eq!(index.lower_bound(2), Some(1));
    /// assert_eq!(index.lower_bound(3), Some(2));
    /// assert_eq!(index.lower_bound(4), None);
    /// ```
    pub fn lower_bound(&self, value: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        // Item i covers range [prefix_sum(i-1), prefix_sum(i))
        let mut left = 0;
        let mut right = self.len;

        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > value {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        if left >= self.len {
            None
        } else {
            Some(left)
        }
    }

    /// Returns the total cumulative height of all items.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.len - 1)
        }
    }

    /// Returns the number of items in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a new item with the given height.
    ///
    /// Grows the backing storage if necessary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wraplist::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(1);
    /// index.push(5);
    /// index.push(3);
    /// index.push(2);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.prefix_sum(1), 8);
    /// assert_eq!(index.total(), 10);
    /// ```
    pub fn push(&mut self, height: usize) {
        if self.len >= self.tree.len() {
            self.grow();
        }

        let idx = self.len;
        self.len += 1;

        // Update the full tree so nodes past `len` stay consistent for later pushes.
        fenwick::array::update(&mut self.tree, idx, height as isize);
    }

    /// Doubles the backing storage.
    ///
    /// Fenwick nodes cover ranges that depend on the array length, so the
    /// tree is rebuilt from the current heights rather than zero-extended.
    fn grow(&mut self) {
        let heights: Vec<usize> = (0..self.len).map(|i| self.height(i)).collect();
        let capacity = self.tree.len().max(1) * 2;
        self.tree = vec![0; capacity];
        for (i, height) in heights.into_iter().enumerate() {
            fenwick::array::update(&mut self.tree, i, height as isize);
        }
    }

    /// Clears all items, resetting to empty state.
    ///
    /// Retains allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.tree.iter_mut().for_each(|node| *node = 0);
        self.len = 0;
    }
}
