//! Traversal expanding outward from the centre of insertion order.
//!
//! For `n` elements the walk starts at index `n / 2` and then alternates to
//! the left neighbour, the next right neighbour, and so on:
//!
//! ```text
//! n = 5:  [1 2 3 4 5]   yields 3, 2, 4, 1, 5
//!              ^
//! n = 4:  [10 20 30 40] yields 30, 20, 40, 10
//!                ^
//! ```
//!
//! The right half never holds fewer elements than the left half, so the
//! alternation runs out on both sides together. The cursor is exhausted only
//! when *both* sides are used up.

use super::{Cursor, Side, trace_capture};
use crate::error::{ContainerError, Result};
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

/// Cursor expanding outward from the middle of a snapshot in insertion order.
///
/// `right` is the next unvisited index at or after the centre, and `left` is
/// the next unvisited index before it (`None` once the front has been
/// reached).
///
/// Because `left` tracks unvisited indices rather than a shared anchor, a
/// single-element cursor begins at `(None, 0)`: index `0` is the centre and
/// nothing lies before it.
///
/// # Examples
///
/// ```rust
/// use orderly::{Cursor, MiddleOutCursor};
///
/// let mut cursor = MiddleOutCursor::begin(&['x']);
/// assert_eq!(cursor.bounds(), (None, 0));
/// assert_eq!(cursor.current(), Ok(&'x'));
/// cursor.advance()?;
/// assert_eq!(cursor, MiddleOutCursor::end(&['x']));
/// # Ok::<(), orderly::ContainerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MiddleOutCursor<T> {
    snapshot: Snapshot<T>,
    left: Option<usize>,
    right: usize,
    side: Side,
}

impl<T: Clone> MiddleOutCursor<T> {
    /// Creates a cursor at the central element of `elements`.
    #[must_use]
    pub fn begin(elements: &[T]) -> Self {
        trace_capture(TraversalOrder::MiddleOut, elements.len(), false);
        let middle = elements.len() / 2;
        Self {
            snapshot: Snapshot::capture(elements),
            left: middle.checked_sub(1),
            right: middle,
            side: Side::Right,
        }
    }

    /// Creates the exhausted cursor matching [`MiddleOutCursor::begin`].
    #[must_use]
    pub fn end(elements: &[T]) -> Self {
        trace_capture(TraversalOrder::MiddleOut, elements.len(), true);
        Self {
            snapshot: Snapshot::capture(elements),
            left: None,
            right: elements.len(),
            side: Side::Right,
        }
    }
}

impl<T> MiddleOutCursor<T> {
    /// Returns the snapshot this cursor walks.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<T> {
        &self.snapshot
    }

    /// Returns the next unvisited indices `(left, right)`.
    ///
    /// These are not the visited anchors: after the centre is read, `right`
    /// has already moved past it.
    #[must_use]
    pub const fn bounds(&self) -> (Option<usize>, usize) {
        (self.left, self.right)
    }

    /// Picks the side and index read next, falling back to the other side if
    /// the preferred one is used up.
    fn next_slot(&self) -> Option<(Side, usize)> {
        let left = self.left.map(|index| (Side::Left, index));
        let right = (self.right < self.snapshot.len()).then_some((Side::Right, self.right));
        match self.side {
            Side::Right => right.or(left),
            Side::Left => left.or(right),
        }
    }
}

impl<T> Cursor for MiddleOutCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::MiddleOut
    }

    fn current(&self) -> Result<&T> {
        self.next_slot()
            .and_then(|(_, index)| self.snapshot.get(index))
            .ok_or(ContainerError::end_of_sequence(TraversalOrder::MiddleOut))
    }

    fn advance(&mut self) -> Result<()> {
        let (side, index) = self
            .next_slot()
            .ok_or(ContainerError::end_of_sequence(TraversalOrder::MiddleOut))?;
        match side {
            Side::Right => self.right += 1,
            Side::Left => self.left = index.checked_sub(1),
        }
        self.side = side.flip();
        Ok(())
    }

    fn is_exhausted(&self) -> bool {
        self.left.is_none() && self.right >= self.snapshot.len()
    }

    fn remaining(&self) -> usize {
        self.left.map_or(0, |index| index + 1) + self.snapshot.len().saturating_sub(self.right)
    }
}

/// Cursors are equal when their bounds and snapshots match; the pending side
/// is not compared.
impl<T: PartialEq> PartialEq for MiddleOutCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right && self.snapshot == other.snapshot
    }
}

impl<T: Eq> Eq for MiddleOutCursor<T> {}
