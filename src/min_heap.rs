//! Binary min-heap over numbers
//!
//! A complete binary tree stored level by level in a vector, so that the
//! minimum is always at the front. Storage is 0-indexed:
//!
//! - parent of `i` is `(i - 1) / 2`
//! - children of `i` are `2i + 1` and `2i + 2`
//!
//! For every index `i > 0`, `storage[i] >= storage[parent(i)]`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `top`     | O(1)       |
//! | `insert`  | O(log n)   |
//! | `extract` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use basic_containers::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! for n in [10, 15, 5, 51, 25, 35, 6] {
//!     heap.insert(n);
//! }
//!
//! assert_eq!(heap.top(), Some(5));
//! assert_eq!(heap.extract(), Some(5));
//! assert_eq!(heap.extract(), Some(6));
//! assert_eq!(heap.len(), 5);
//! ```

use crate::traits::ContainerError;
use std::fmt::{self, Write};
use tracing::trace;

/// Indent per tree level used by [`MinHeap::render_tree`]
pub const DEFAULT_INDENT: usize = 10;

/// Numeric types a [`MinHeap`] can hold
///
/// Implemented for the primitive integer and floating-point types. Comparisons
/// are expected to form a total order, so NaN must not be inserted.
pub trait Number: Copy + PartialOrd + fmt::Debug + fmt::Display {}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $(impl Number for $t {})*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// An array-backed binary min-heap
///
/// Duplicates are allowed; the relative order in which equal values are
/// extracted is unspecified.
#[derive(Debug, Clone)]
pub struct MinHeap<N: Number> {
    data: Vec<N>,
}

impl<N: Number> MinHeap<N> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the minimum without removing it, or `None` if empty
    pub fn top(&self) -> Option<N> {
        self.data.first().copied()
    }

    /// Inserts a value, sifting it up until its parent is no larger
    pub fn insert(&mut self, value: N) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum, or `None` if empty
    ///
    /// The last value takes the root's slot and is sifted down, always
    /// swapping with the smaller child.
    pub fn extract(&mut self) -> Option<N> {
        if self.data.is_empty() {
            return None;
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(min)
    }

    /// The heap's storage in tree order
    ///
    /// `as_slice()[0]` is the root; see the module docs for the index arithmetic.
    pub fn as_slice(&self) -> &[N] {
        &self.data
    }

    /// Checks the heap order over every populated slot
    ///
    /// # Errors
    /// Returns [`ContainerError::HeapOrderViolated`] for the first slot found
    /// holding a value smaller than its parent.
    pub fn validate(&self) -> Result<(), ContainerError> {
        for index in 1..self.data.len() {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                return Err(ContainerError::HeapOrderViolated { index, parent });
            }
        }
        Ok(())
    }

    /// Renders the heap as a sideways tree using [`DEFAULT_INDENT`]
    ///
    /// See [`MinHeap::render_tree_with_indent`].
    pub fn render_tree(&self) -> String {
        self.render_tree_with_indent(DEFAULT_INDENT)
    }

    /// Renders the heap as a sideways tree
    ///
    /// The root sits at the left margin. Each node is printed as
    /// `value (position)` with its 1-based tree position, the right subtree
    /// above it and the left subtree below it, and every level indented by
    /// `indent` more spaces than its parent.
    ///
    /// ```rust
    /// use basic_containers::min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.insert(3);
    /// heap.insert(1);
    /// heap.insert(2);
    ///
    /// assert_eq!(heap.render_tree_with_indent(2), "  2 (3)\n1 (1)\n  3 (2)\n");
    /// ```
    pub fn render_tree_with_indent(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_subtree(&mut out, 0, 0, indent)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_subtree<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        depth: usize,
        indent: usize,
    ) -> fmt::Result {
        if index >= self.data.len() {
            return Ok(());
        }

        self.write_subtree(out, 2 * index + 2, depth + 1, indent)?;
        writeln!(
            out,
            "{:width$}{} ({})",
            "",
            self.data[index],
            index + 1,
            width = depth * indent
        )?;
        self.write_subtree(out, 2 * index + 1, depth + 1, indent)
    }

    /// Move element at index up while its parent is strictly greater
    fn sift_up(&mut self, mut index: usize) {
        let mut swaps = 0usize;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] > self.data[index] {
                self.data.swap(index, parent);
                index = parent;
                swaps += 1;
            } else {
                break;
            }
        }
        trace!(swaps, position = index, "sift_up complete");
    }

    /// Move element at index down, swapping with the smaller child, while
    /// some child is strictly smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        let mut swaps = 0usize;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
                swaps += 1;
            } else {
                break;
            }
        }
        trace!(swaps, position = index, "sift_down complete");
    }
}

impl<N: Number> Default for MinHeap<N> {
    fn default() -> Self {
        Self::new()
    }
}
