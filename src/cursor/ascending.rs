//! Sorted traversal, smallest element first.

use std::cmp::Ordering;

use super::{Cursor, ForwardWalk, Position, trace_capture};
use crate::error::Result;
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

/// Cursor over a snapshot sorted in ascending order.
///
/// Equal elements may be visited in any relative order.
///
/// # Examples
///
/// ```rust
/// use orderly::{AscendingCursor, Cursor};
///
/// let values: Vec<i32> = AscendingCursor::begin(&[5, 1, 8, 3]).into_traversal().collect();
/// assert_eq!(values, vec![1, 3, 5, 8]);
///
/// // Element types without a total order can supply a comparator.
/// let floats: Vec<f64> = AscendingCursor::begin_by(&[2.5, -1.0, 0.5], f64::total_cmp)
///     .into_traversal()
///     .collect();
/// assert_eq!(floats, vec![-1.0, 0.5, 2.5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AscendingCursor<T> {
    walk: ForwardWalk<T>,
}

impl<T: Clone + Ord> AscendingCursor<T> {
    /// Creates a cursor at the smallest element of `elements`.
    #[must_use]
    pub fn begin(elements: &[T]) -> Self {
        Self::begin_by(elements, T::cmp)
    }

    /// Creates the exhausted cursor matching [`AscendingCursor::begin`].
    #[must_use]
    pub fn end(elements: &[T]) -> Self {
        Self::end_by(elements, T::cmp)
    }
}

impl<T: Clone> AscendingCursor<T> {
    /// Creates a cursor at the smallest element according to `compare`.
    pub fn begin_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_capture(TraversalOrder::Ascending, elements.len(), false);
        Self {
            walk: ForwardWalk::begin(Snapshot::sorted_by(elements, compare)),
        }
    }

    /// Creates the exhausted cursor matching [`AscendingCursor::begin_by`].
    pub fn end_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_capture(TraversalOrder::Ascending, elements.len(), true);
        Self {
            walk: ForwardWalk::end(Snapshot::sorted_by(elements, compare)),
        }
    }
}

impl<T> AscendingCursor<T> {
    /// Returns the sorted snapshot this cursor walks.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<T> {
        self.walk.snapshot()
    }

    /// Returns the cursor position within the sorted snapshot.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.walk.position()
    }
}

impl<T> Cursor for AscendingCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Ascending
    }

    fn current(&self) -> Result<&T> {
        self.walk.current(TraversalOrder::Ascending)
    }

    fn advance(&mut self) -> Result<()> {
        self.walk.advance(TraversalOrder::Ascending)
    }

    fn is_exhausted(&self) -> bool {
        self.walk.position().is_exhausted()
    }

    fn remaining(&self) -> usize {
        self.walk.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerError;
    use rstest::rstest;

    #[rstest]
    fn test_begin_sorts_snapshot() {
        let cursor = AscendingCursor::begin(&[5, 1, 8, 3]);
        assert_eq!(cursor.snapshot().as_slice(), &[1, 3, 5, 8]);
        assert_eq!(cursor.position(), Position::Active(0));
        assert_eq!(cursor.current(), Ok(&1));
    }

    #[rstest]
    fn test_walk_reaches_end() {
        let elements = [5, 1, 8, 3];
        let mut cursor = AscendingCursor::begin(&elements);
        for _ in 0..elements.len() {
            cursor.advance().unwrap();
        }
        assert_eq!(cursor, AscendingCursor::end(&elements));
        assert_eq!(
            cursor.current(),
            Err(ContainerError::end_of_sequence(TraversalOrder::Ascending))
        );
        assert_eq!(
            cursor.advance(),
            Err(ContainerError::end_of_sequence(TraversalOrder::Ascending))
        );
    }

    #[rstest]
    fn test_duplicates_are_kept() {
        let values: Vec<i32> = AscendingCursor::begin(&[2, 1, 2, 1])
            .into_traversal()
            .collect();
        assert_eq!(values, vec![1, 1, 2, 2]);
    }

    #[rstest]
    fn test_cursors_over_different_contents_differ() {
        assert_ne!(AscendingCursor::end(&[1, 2]), AscendingCursor::end(&[1, 3]));
    }
}
