//! Sorted traversal, largest element first.

use std::cmp::Ordering;

use super::{Cursor, ForwardWalk, Position, trace_capture};
use crate::error::Result;
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

/// Cursor over a snapshot sorted in descending order.
///
/// The `_by` constructors take the same *ascending* comparator as
/// [`AscendingCursor::begin_by`](super::AscendingCursor::begin_by) and reverse it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescendingCursor<T> {
    walk: ForwardWalk<T>,
}

impl<T: Clone + Ord> DescendingCursor<T> {
    /// Creates a cursor at the largest element of `elements`.
    #[must_use]
    pub fn begin(elements: &[T]) -> Self {
        Self::begin_by(elements, T::cmp)
    }

    /// Creates the exhausted cursor matching [`DescendingCursor::begin`].
    #[must_use]
    pub fn end(elements: &[T]) -> Self {
        Self::end_by(elements, T::cmp)
    }
}

impl<T: Clone> DescendingCursor<T> {
    /// Creates a cursor at the largest element according to `compare`.
    pub fn begin_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_capture(TraversalOrder::Descending, elements.len(), false);
        Self {
            walk: ForwardWalk::begin(Self::sorted_descending(elements, compare)),
        }
    }

    /// Creates the exhausted cursor matching [`DescendingCursor::begin_by`].
    pub fn end_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace_capture(TraversalOrder::Descending, elements.len(), true);
        Self {
            walk: ForwardWalk::end(Self::sorted_descending(elements, compare)),
        }
    }

    fn sorted_descending<F>(elements: &[T], mut compare: F) -> Snapshot<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Snapshot::sorted_by(elements, move |left, right| compare(right, left))
    }
}

impl<T> DescendingCursor<T> {
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

impl<T> Cursor for DescendingCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Descending
    }

    fn current(&self) -> Result<&T> {
        self.walk.current(TraversalOrder::Descending)
    }

    fn advance(&mut self) -> Result<()> {
        self.walk.advance(TraversalOrder::Descending)
    }

    fn is_exhausted(&self) -> bool {
        self.walk.position().is_exhausted()
    }

    fn remaining(&self) -> usize {
        self.walk.remaining()
    }
}
