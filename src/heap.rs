//! Array-backed binary heaps.

use std::fmt;

/// Decides which of two elements belongs closer to the top of a heap.
pub trait Comparator<T> {
    /// Returns true if `a` must sit above `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Largest element on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxFirst;

/// Smallest element on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord> Comparator<T> for MinFirst {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// A binary heap ordered by a [`Comparator`], a max-heap by default.
///
/// ```
/// use classic_collections::{BinaryHeap, BinaryMinHeap};
///
/// let mut max = BinaryHeap::new();
/// let mut min = BinaryMinHeap::default();
/// for x in [3, 1, 4, 1, 5] {
///     max.push(x);
///     min.push(x);
/// }
/// assert_eq!(max.pop(), Some(5));
/// assert_eq!(min.pop(), Some(1));
/// ```
#[derive(Clone)]
pub struct BinaryHeap<T, C = MaxFirst> {
    elements: Vec<T>,
    comparator: C,
}

/// A binary heap with the smallest element on top.
/// Create one with `BinaryMinHeap::default()`.
pub type BinaryMinHeap<T> = BinaryHeap<T, MinFirst>;

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty max-heap. See [`BinaryMinHeap`] for the min variant.
    pub fn new() -> Self {
        Self::with_comparator(MaxFirst)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn push(&mut self, element: T) {
        self.elements.push(element);
        self.bubble_up();
    }

    pub fn insert(&mut self, element: T) {
        self.push(element);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.len() <= 1 {
            return self.elements.pop();
        }
        // Bring the last element to the top, then sink it back down
        let top = self.elements.swap_remove(0);
        self.sink_down();
        Some(top)
    }

    pub fn remove(&mut self) -> Option<T> {
        self.pop()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn bubble_up(&mut self) {
        let mut i = self.elements.len() - 1;
        while i > 0 {
            let parent = parent_index(i);
            // Equal elements still move up
            if self
                .comparator
                .precedes(&self.elements[parent], &self.elements[i])
            {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sink_down(&mut self) {
        let size = self.elements.len();
        let mut i = 0;
        loop {
            let mut child = left_child_index(i);
            if child >= size {
                break;
            }
            let right = child + 1;
            if right < size
                && self
                    .comparator
                    .precedes(&self.elements[right], &self.elements[child])
            {
                child = right;
            }
            // Parent already beats both children
            if !self
                .comparator
                .precedes(&self.elements[child], &self.elements[i])
            {
                break;
            }
            self.elements.swap(i, child);
            i = child;
        }
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

fn parent_index(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child_index(i: usize) -> usize {
    2 * i + 1
}
