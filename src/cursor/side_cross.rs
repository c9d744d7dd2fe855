//! Sorted traversal alternating between the smallest and largest remaining values.
//!
//! For a sorted snapshot `s[0..n)` the order is
//! `s[0], s[n-1], s[1], s[n-2], ...`. The cursor keeps a half-open window
//! `left..right` of unvisited indices and takes from its left end, then its
//! right end, shrinking it until it is empty. With an odd length the middle
//! element is the last one visited, always from the left end.
//!
//! ```text
//! n = 5:  [1 2 5 7 9]   left right  yield
//!                        0    5     1
//!                        1    5     9
//!                        1    4     2
//!                        2    4     7
//!                        2    3     5
//!                        3    3     (exhausted)
//! ```
//!
//! The exhausted window always sits at `left == right == ceil(n / 2)`, which is
//! what [`SideCrossCursor::end`] builds.

use std::cmp::Ordering;

use super::{Cursor, Side, trace_capture};
use crate::error::{ContainerError, Result};
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

/// Cursor alternating between the low and high ends of a sorted snapshot.
///
/// # Examples
///
/// ```rust
/// use orderly::{Cursor, SideCrossCursor};
///
/// let even: Vec<i32> = SideCrossCursor::begin(&[7, 1, 10, 3]).into_traversal().collect();
/// assert_eq!(even, vec![1, 10, 3, 7]);
///
/// let odd: Vec<i32> = SideCrossCursor::begin(&[9, 2, 5, 1, 7]).into_traversal().collect();
/// assert_eq!(odd, vec![1, 9, 2, 7, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct SideCrossCursor<T> {
    snapshot: Snapshot<T>,
    left: usize,
    right: usize,
    side: Side,
}

impl<T: Clone + Ord> SideCrossCursor<T> {
    /// Creates a cursor at the smallest element of `elements`.
    #[must_use]
    pub fn begin(elements: &[T]) -> Self {
        Self::begin_by(elements, T::cmp)
    }

    /// Creates the exhausted cursor matching [`SideCrossCursor::begin`].
    #[must_use]
    pub fn end(elements: &[T]) -> Self {
        Self::end_by(elements, T::cmp)
    }
}

impl<T: Clone> SideCrossCursor<T> {
    /// Creates a cursor over `elements` sorted by `compare`.
    pub fn begin_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_capture(TraversalOrder::SideCross, elements.len(), false);
        let snapshot = Snapshot::sorted_by(elements, compare);
        let right = snapshot.len();
        Self {
            snapshot,
            left: 0,
            right,
            side: Side::Left,
        }
    }

    /// Creates the exhausted cursor matching [`SideCrossCursor::begin_by`].
    pub fn end_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_capture(TraversalOrder::SideCross, elements.len(), true);
        let snapshot = Snapshot::sorted_by(elements, compare);
        let meeting_point = snapshot.len().div_ceil(2);
        let side = if snapshot.len() % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        };
        Self {
            snapshot,
            left: meeting_point,
            right: meeting_point,
            side,
        }
    }
}

impl<T> SideCrossCursor<T> {
    /// Returns the sorted snapshot this cursor walks.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<T> {
        &self.snapshot
    }

    /// Returns the unvisited window `left..right` of snapshot indices.
    #[must_use]
    pub const fn window(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    const fn next_index(&self) -> Option<usize> {
        if self.left >= self.right {
            return None;
        }
        match self.side {
            Side::Left => Some(self.left),
            Side::Right => Some(self.right - 1),
        }
    }
}

impl<T> Cursor for SideCrossCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::SideCross
    }

    fn current(&self) -> Result<&T> {
        self.next_index()
            .and_then(|index| self.snapshot.get(index))
            .ok_or(ContainerError::end_of_sequence(TraversalOrder::SideCross))
    }

    fn advance(&mut self) -> Result<()> {
        if self.is_exhausted() {
            return Err(ContainerError::end_of_sequence(TraversalOrder::SideCross));
        }
        match self.side {
            Side::Left => self.left += 1,
            Side::Right => self.right -= 1,
        }
        self.side = self.side.flip();
        Ok(())
    }

    fn is_exhausted(&self) -> bool {
        self.left >= self.right
    }

    fn remaining(&self) -> usize {
        self.right.saturating_sub(self.left)
    }
}

/// Cursors are equal when their windows and snapshots match; the pending side
/// is not compared.
impl<T: PartialEq> PartialEq for SideCrossCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right && self.snapshot == other.snapshot
    }
}

impl<T: Eq> Eq for SideCrossCursor<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, (0, 0))]
    #[case(1, (1, 1))]
    #[case(2, (1, 1))]
    #[case(4, (2, 2))]
    #[case(5, (3, 3))]
    #[case(8, (4, 4))]
    #[case(9, (5, 5))]
    fn test_advancing_begin_reaches_end_window(
        #[case] length: i32,
        #[case] expected_window: (usize, usize),
    ) {
        let elements: Vec<i32> = (0..length).collect();
        let mut cursor = SideCrossCursor::begin(&elements);
        while !cursor.is_exhausted() {
            cursor.advance().unwrap();
        }
        let end = SideCrossCursor::end(&elements);
        assert_eq!(cursor.window(), expected_window);
        assert_eq!(end.window(), expected_window);
        assert_eq!(cursor, end);
    }

    #[rstest]
    fn test_window_shrinks_alternately() {
        let mut cursor = SideCrossCursor::begin(&[1, 3, 7, 10]);
        assert_eq!(cursor.window(), (0, 4));
        cursor.advance().unwrap();
        assert_eq!(cursor.window(), (1, 4));
        cursor.advance().unwrap();
        assert_eq!(cursor.window(), (1, 3));
        assert_eq!(cursor.current(), Ok(&3));
        assert_eq!(cursor.remaining(), 2);
    }

    #[rstest]
    fn test_odd_length_visits_middle_last() {
        let values: Vec<i32> = SideCrossCursor::begin(&[2, 1, 3]).into_traversal().collect();
        assert_eq!(values, vec![1, 3, 2]);
    }

    #[rstest]
    fn test_exhausted_cursor_rejects_access() {
        let mut cursor = SideCrossCursor::end(&[1, 2, 3]);
        assert_eq!(
            cursor.current(),
            Err(ContainerError::end_of_sequence(TraversalOrder::SideCross))
        );
        assert_eq!(
            cursor.advance(),
            Err(ContainerError::end_of_sequence(TraversalOrder::SideCross))
        );
    }

    #[rstest]
    fn test_begin_by_with_float_comparator() {
        let values: Vec<f64> =
            SideCrossCursor::begin_by(&[2.5, 9.75, 1.25, 6.5, 3.5], f64::total_cmp)
                .into_traversal()
                .collect();
        assert_eq!(values, vec![1.25, 9.75, 2.5, 6.5, 3.5]);
    }
}
