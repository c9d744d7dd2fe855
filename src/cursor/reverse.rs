//! Traversal in reverse insertion order.

use super::{Cursor, Position, trace_capture};
use crate::error::{ContainerError, Result};
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

/// Cursor walking a snapshot from the last inserted element to the first.
///
/// Advancing from index `0` moves to [`Position::Exhausted`], which stands
/// for "before the first element".
///
/// # Examples
///
/// ```rust
/// use orderly::{Cursor, Position, ReverseCursor};
///
/// let mut cursor = ReverseCursor::begin(&[1, 2, 3]);
/// assert_eq!(cursor.position(), Position::Active(2));
/// assert_eq!(cursor.current(), Ok(&3));
///
/// let rest: Vec<i32> = {
///     cursor.advance()?;
///     cursor.into_traversal().collect()
/// };
/// assert_eq!(rest, vec![2, 1]);
/// # Ok::<(), orderly::ContainerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ReverseCursor<T> {
    snapshot: Snapshot<T>,
    position: Position,
}

impl<T: Clone> ReverseCursor<T> {
    /// Creates a cursor at the last inserted element.
    #[must_use]
    pub fn begin(elements: &[T]) -> Self {
        trace_capture(TraversalOrder::Reverse, elements.len(), false);
        let position = elements
            .len()
            .checked_sub(1)
            .map_or(Position::Exhausted, Position::Active);
        Self {
            snapshot: Snapshot::capture(elements),
            position,
        }
    }

    /// Creates the exhausted cursor matching [`ReverseCursor::begin`].
    #[must_use]
    pub fn end(elements: &[T]) -> Self {
        trace_capture(TraversalOrder::Reverse, elements.len(), true);
        Self {
            snapshot: Snapshot::capture(elements),
            position: Position::Exhausted,
        }
    }
}

impl<T> ReverseCursor<T> {
    /// Returns the snapshot this cursor walks.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<T> {
        &self.snapshot
    }

    /// Returns the cursor position within the snapshot.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}

impl<T> Cursor for ReverseCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Reverse
    }

    fn current(&self) -> Result<&T> {
        self.position
            .index()
            .and_then(|index| self.snapshot.get(index))
            .ok_or(ContainerError::end_of_sequence(TraversalOrder::Reverse))
    }

    fn advance(&mut self) -> Result<()> {
        match self.position {
            Position::Active(index) => {
                self.position = index
                    .checked_sub(1)
                    .map_or(Position::Exhausted, Position::Active);
                Ok(())
            }
            Position::Exhausted => Err(ContainerError::end_of_sequence(TraversalOrder::Reverse)),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.position.is_exhausted()
    }

    fn remaining(&self) -> usize {
        self.position.index().map_or(0, |index| index + 1)
    }
}

/// Positions are compared before snapshots.
impl<T: PartialEq> PartialEq for ReverseCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.snapshot == other.snapshot
    }
}

impl<T: Eq> Eq for ReverseCursor<T> {}
