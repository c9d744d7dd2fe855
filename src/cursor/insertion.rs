//! Traversal in insertion order.

use super::{Cursor, ForwardWalk, Position, trace_capture};
use crate::error::Result;
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

/// Cursor walking a snapshot in the order elements were added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionCursor<T> {
    walk: ForwardWalk<T>,
}

impl<T: Clone> InsertionCursor<T> {
    /// Creates a cursor at the first inserted element.
    #[must_use]
    pub fn begin(elements: &[T]) -> Self {
        trace_capture(TraversalOrder::Insertion, elements.len(), false);
        Self {
            walk: ForwardWalk::begin(Snapshot::capture(elements)),
        }
    }

    /// Creates the exhausted cursor matching [`InsertionCursor::begin`].
    #[must_use]
    pub fn end(elements: &[T]) -> Self {
        trace_capture(TraversalOrder::Insertion, elements.len(), true);
        Self {
            walk: ForwardWalk::end(Snapshot::capture(elements)),
        }
    }
}

impl<T> InsertionCursor<T> {
    /// Returns the snapshot this cursor walks.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot<T> {
        self.walk.snapshot()
    }

    /// Returns the cursor position within the snapshot.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.walk.position()
    }
}

impl<T> Cursor for InsertionCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        TraversalOrder::Insertion
    }

    fn current(&self) -> Result<&T> {
        self.walk.current(TraversalOrder::Insertion)
    }

    fn advance(&mut self) -> Result<()> {
        self.walk.advance(TraversalOrder::Insertion)
    }

    fn is_exhausted(&self) -> bool {
        self.walk.position().is_exhausted()
    }

    fn remaining(&self) -> usize {
        self.walk.remaining()
    }
}
