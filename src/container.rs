//! Insertion-ordered container with six traversal orders.
//!
//! This module provides [`OrderedContainer`], a growable sequence that keeps
//! elements in the order they were added and hands out cursors that walk a
//! private snapshot of its contents.
//!
//! # Overview
//!
//! | Order        | Sorts? | Example over `7, 15, 6, 1, 2` |
//! |--------------|--------|-------------------------------|
//! | `ascending`  | yes    | `1, 2, 6, 7, 15`              |
//! | `descending` | yes    | `15, 7, 6, 2, 1`              |
//! | `side_cross` | yes    | `1, 15, 2, 7, 6`              |
//! | `reverse`    | no     | `2, 1, 6, 15, 7`              |
//! | `insertion`  | no     | `7, 15, 6, 1, 2`              |
//! | `middle_out` | no     | `6, 15, 1, 7, 2`              |
//!
//! # Snapshot Isolation
//!
//! Every cursor copies the container when it is created. Mutating the
//! container afterwards does not change what an existing cursor yields:
//!
//! ```rust
//! use orderly::{Cursor, OrderedContainer};
//!
//! let mut container: OrderedContainer<i32> = [1, 2, 3].into_iter().collect();
//! let cursor = container.begin_insertion();
//!
//! container.add(4);
//! container.remove(&1)?;
//!
//! let seen: Vec<i32> = cursor.into_traversal().collect();
//! assert_eq!(seen, vec![1, 2, 3]);
//! assert_eq!(container.elements(), &[2, 3, 4]);
//! # Ok::<(), orderly::ContainerError>(())
//! ```
//!
//! # Time Complexity
//!
//! | Operation                    | Complexity   |
//! |------------------------------|--------------|
//! | `add`                        | O(1) amortized |
//! | `remove`                     | O(n)         |
//! | `size`                       | O(1)         |
//! | `begin_*`/`end_*` (sorted)   | O(n log n)   |
//! | `begin_*`/`end_*` (unsorted) | O(n)         |

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{
    AscendingCursor, Cursor, DescendingCursor, InsertionCursor, MiddleOutCursor, OrderCursor,
    ReverseCursor, SideCrossCursor, Traversal,
};
use crate::error::{ContainerError, Result};
use crate::order::TraversalOrder;

/// A growable, insertion-ordered collection that allows duplicates.
///
/// # Examples
///
/// ```rust
/// use orderly::OrderedContainer;
///
/// let mut container = OrderedContainer::new();
/// container.add(7);
/// container.add(15);
/// container.add(7);
///
/// assert_eq!(container.size(), 3);
/// assert_eq!(container.to_string(), "[ 7, 15, 7 ]");
///
/// assert_eq!(container.remove(&7), Ok(2));
/// assert_eq!(container.elements(), &[15]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedContainer<T> {
    elements: Vec<T>,
}

impl<T> OrderedContainer<T> {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty container with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` after every existing element.
    ///
    /// Cursors created earlier are not affected.
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
        tracing::debug!(size = self.elements.len(), "added element");
    }

    /// Returns the number of stored elements, duplicates included.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the stored elements in insertion order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Returns a borrowing iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> OrderedContainer<T> {
    /// Removes every element equal to `value`, keeping the survivors in order.
    ///
    /// Returns the number of removed elements.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NotFound`] if no element equals `value`; the
    /// container is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::{ContainerError, OrderedContainer};
    ///
    /// let mut container: OrderedContainer<i32> = [1, 2, 1, 3].into_iter().collect();
    /// assert_eq!(container.remove(&1), Ok(2));
    /// assert_eq!(container.elements(), &[2, 3]);
    /// assert_eq!(container.remove(&1), Err(ContainerError::NotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<usize> {
        let mut removed = 0;
        self.elements.retain(|element| {
            let matched = element == value;
            if matched {
                removed += 1;
            }
            !matched
        });
        if removed == 0 {
            tracing::debug!(size = self.elements.len(), "remove matched no element");
            return Err(ContainerError::NotFound);
        }
        tracing::debug!(removed, size = self.elements.len(), "removed elements");
        Ok(removed)
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T: fmt::Display> OrderedContainer<T> {
    /// Renders the container as `[ e1, e2, ..., en ]`.
    ///
    /// An empty container renders as `[  ]`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Cursor Factories
// =============================================================================

impl<T: Clone> OrderedContainer<T> {
    /// Returns a cursor at the last inserted element.
    #[must_use]
    pub fn begin_reverse(&self) -> ReverseCursor<T> {
        ReverseCursor::begin(&self.elements)
    }

    /// Returns the exhausted cursor matching [`OrderedContainer::begin_reverse`].
    #[must_use]
    pub fn end_reverse(&self) -> ReverseCursor<T> {
        ReverseCursor::end(&self.elements)
    }

    /// Returns a cursor at the first inserted element.
    #[must_use]
    pub fn begin_insertion(&self) -> InsertionCursor<T> {
        InsertionCursor::begin(&self.elements)
    }

    /// Returns the exhausted cursor matching [`OrderedContainer::begin_insertion`].
    #[must_use]
    pub fn end_insertion(&self) -> InsertionCursor<T> {
        InsertionCursor::end(&self.elements)
    }

    /// Returns a cursor at the central element in insertion order.
    #[must_use]
    pub fn begin_middle_out(&self) -> MiddleOutCursor<T> {
        MiddleOutCursor::begin(&self.elements)
    }

    /// Returns the exhausted cursor matching [`OrderedContainer::begin_middle_out`].
    #[must_use]
    pub fn end_middle_out(&self) -> MiddleOutCursor<T> {
        MiddleOutCursor::end(&self.elements)
    }
}

impl<T: Clone + Ord> OrderedContainer<T> {
    /// Returns a cursor at the smallest element.
    #[must_use]
    pub fn begin_ascending(&self) -> AscendingCursor<T> {
        AscendingCursor::begin(&self.elements)
    }

    /// Returns the exhausted cursor matching [`OrderedContainer::begin_ascending`].
    #[must_use]
    pub fn end_ascending(&self) -> AscendingCursor<T> {
        AscendingCursor::end(&self.elements)
    }

    /// Returns a cursor at the largest element.
    #[must_use]
    pub fn begin_descending(&self) -> DescendingCursor<T> {
        DescendingCursor::begin(&self.elements)
    }

    /// Returns the exhausted cursor matching [`OrderedContainer::begin_descending`].
    #[must_use]
    pub fn end_descending(&self) -> DescendingCursor<T> {
        DescendingCursor::end(&self.elements)
    }

    /// Returns a cursor alternating between the smallest and largest remaining elements.
    #[must_use]
    pub fn begin_side_cross(&self) -> SideCrossCursor<T> {
        SideCrossCursor::begin(&self.elements)
    }

    /// Returns the exhausted cursor matching [`OrderedContainer::begin_side_cross`].
    #[must_use]
    pub fn end_side_cross(&self) -> SideCrossCursor<T> {
        SideCrossCursor::end(&self.elements)
    }

    /// Returns the begin cursor of `order`.
    #[must_use]
    pub fn begin(&self, order: TraversalOrder) -> OrderCursor<T> {
        self.begin_by(order, T::cmp)
    }

    /// Returns the end cursor of `order`.
    #[must_use]
    pub fn end(&self, order: TraversalOrder) -> OrderCursor<T> {
        self.end_by(order, T::cmp)
    }

    /// Returns an iterator yielding the elements in `order`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::{OrderedContainer, TraversalOrder};
    ///
    /// let container: OrderedContainer<&str> =
    ///     ["zebra", "apple", "dog", "cat", "bird"].into_iter().collect();
    /// let side_cross: Vec<&str> = container.traverse(TraversalOrder::SideCross).collect();
    /// assert_eq!(side_cross, vec!["apple", "zebra", "bird", "dog", "cat"]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<OrderCursor<T>> {
        self.traverse_by(order, T::cmp)
    }
}

impl<T: Clone> OrderedContainer<T> {
    /// Returns the begin cursor of `order`, sorting with `compare` for the
    /// ascending, descending and side-cross orders.
    pub fn begin_by<F>(&self, order: TraversalOrder, compare: F) -> OrderCursor<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        OrderCursor::begin_by(order, &self.elements, compare)
    }

    /// Returns the end cursor matching [`OrderedContainer::begin_by`].
    pub fn end_by<F>(&self, order: TraversalOrder, compare: F) -> OrderCursor<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        OrderCursor::end_by(order, &self.elements, compare)
    }

    /// Returns an iterator yielding the elements in `order`, sorting with
    /// `compare` where the order needs it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::{OrderedContainer, TraversalOrder};
    ///
    /// let container: OrderedContainer<f64> = [2.5, -0.5, 1.25].into_iter().collect();
    /// let descending: Vec<f64> = container
    ///     .traverse_by(TraversalOrder::Descending, f64::total_cmp)
    ///     .collect();
    /// assert_eq!(descending, vec![2.5, 1.25, -0.5]);
    /// ```
    pub fn traverse_by<F>(&self, order: TraversalOrder, compare: F) -> Traversal<OrderCursor<T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.begin_by(order, compare).into_traversal()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedContainer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
        tracing::debug!(size = self.elements.len(), "extended container");
    }
}

impl<'a, T> IntoIterator for &'a OrderedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedContainer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedContainer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[ ")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, " ]")
    }
}
