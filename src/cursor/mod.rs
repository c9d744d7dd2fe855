//! Traversal cursors over container snapshots.
//!
//! Each of the six traversal orders has its own cursor type. All of them
//! follow the same protocol, captured by the [`Cursor`] trait:
//!
//! - [`Cursor::current`] reads the element under the cursor,
//! - [`Cursor::advance`] moves to the next element of the order,
//! - [`Cursor::is_exhausted`] reports whether the sequence has ended.
//!
//! Reading or advancing an exhausted cursor fails with
//! [`ContainerError::EndOfSequence`].
//!
//! # State Machine
//!
//! ```text
//!               advance (more elements)
//!             ┌─────────┐
//!             ▼         │
//!     ──► Active(position) ──────────────► Exhausted
//!     │                  advance (last)       ▲
//!     └───────────────────────────────────────┘
//!                 begin on empty snapshot
//! ```
//!
//! A begin cursor and an end cursor created from the same container state
//! compare equal once the begin cursor has been advanced through every
//! element, so the classic `while cursor != end` loop works:
//!
//! ```rust
//! use orderly::{Cursor, OrderedContainer};
//!
//! let container: OrderedContainer<i32> = [5, 1, 8, 3].into_iter().collect();
//!
//! let mut cursor = container.begin_ascending();
//! let end = container.end_ascending();
//! let mut visited = Vec::new();
//! while cursor != end {
//!     visited.push(*cursor.current()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(visited, vec![1, 3, 5, 8]);
//! # Ok::<(), orderly::ContainerError>(())
//! ```
//!
//! For ordinary `for` loops, [`Cursor::into_traversal`] turns any cursor into
//! a standard [`Iterator`].

use std::iter::FusedIterator;

use crate::error::{ContainerError, Result};
use crate::order::TraversalOrder;
use crate::snapshot::Snapshot;

mod any;
mod ascending;
mod descending;
mod insertion;
mod middle_out;
mod reverse;
mod side_cross;

pub use any::OrderCursor;
pub use ascending::AscendingCursor;
pub use descending::DescendingCursor;
pub use insertion::InsertionCursor;
pub use middle_out::MiddleOutCursor;
pub use reverse::ReverseCursor;
pub use side_cross::SideCrossCursor;

// =============================================================================
// Cursor Protocol
// =============================================================================

/// A restartable, forward-only, single-pass view over a snapshot.
pub trait Cursor {
    /// The element type yielded by this cursor.
    type Item;

    /// Returns the traversal order this cursor walks.
    fn order(&self) -> TraversalOrder;

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EndOfSequence`] if the cursor is exhausted.
    fn current(&self) -> Result<&Self::Item>;

    /// Moves the cursor to the next element of its order.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EndOfSequence`] if the cursor is exhausted.
    fn advance(&mut self) -> Result<()>;

    /// Returns `true` once every element has been visited.
    fn is_exhausted(&self) -> bool;

    /// Returns the number of elements not yet visited, including the current one.
    fn remaining(&self) -> usize;

    /// Wraps this cursor in an [`Iterator`] that yields clones of each element.
    fn into_traversal(self) -> Traversal<Self>
    where
        Self: Sized,
    {
        Traversal::new(self)
    }
}

// =============================================================================
// Position
// =============================================================================

/// The position of a single-index cursor.
///
/// An explicit `Exhausted` state stands in for "past the end" (or "before the
/// first element" for [`ReverseCursor`]), so no index value is reserved as a
/// sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The cursor points at the element with this snapshot index.
    Active(usize),
    /// No element remains.
    Exhausted,
}

impl Position {
    /// Returns the snapshot index, or `None` when exhausted.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Active(index) => Some(index),
            Self::Exhausted => None,
        }
    }

    /// Returns `true` for [`Position::Exhausted`].
    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Which end a two-ended cursor reads from next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

pub(crate) fn trace_capture(order: TraversalOrder, length: usize, at_end: bool) {
    tracing::trace!(%order, length, at_end, "captured traversal snapshot");
}

// =============================================================================
// ForwardWalk
// =============================================================================

/// Index-by-index walk from the first snapshot element to the last.
///
/// Shared by the ascending, descending and insertion cursors, which differ
/// only in how their snapshot is prepared.
#[derive(Clone, Debug)]
pub(crate) struct ForwardWalk<T> {
    snapshot: Snapshot<T>,
    position: Position,
}

impl<T> ForwardWalk<T> {
    pub(crate) fn begin(snapshot: Snapshot<T>) -> Self {
        let position = if snapshot.is_empty() {
            Position::Exhausted
        } else {
            Position::Active(0)
        };
        Self { snapshot, position }
    }

    pub(crate) const fn end(snapshot: Snapshot<T>) -> Self {
        Self {
            snapshot,
            position: Position::Exhausted,
        }
    }

    pub(crate) const fn snapshot(&self) -> &Snapshot<T> {
        &self.snapshot
    }

    pub(crate) const fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn current(&self, order: TraversalOrder) -> Result<&T> {
        self.position
            .index()
            .and_then(|index| self.snapshot.get(index))
            .ok_or(ContainerError::end_of_sequence(order))
    }

    pub(crate) fn advance(&mut self, order: TraversalOrder) -> Result<()> {
        match self.position {
            Position::Active(index) if index + 1 < self.snapshot.len() => {
                self.position = Position::Active(index + 1);
                Ok(())
            }
            Position::Active(_) => {
                self.position = Position::Exhausted;
                Ok(())
            }
            Position::Exhausted => Err(ContainerError::end_of_sequence(order)),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.position
            .index()
            .map_or(0, |index| self.snapshot.len() - index)
    }
}

/// Positions are compared before snapshots, so a `cursor != end` check on an
/// unfinished walk does not touch the elements.
impl<T: PartialEq> PartialEq for ForwardWalk<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.snapshot == other.snapshot
    }
}

impl<T: Eq> Eq for ForwardWalk<T> {}

// =============================================================================
// Traversal
// =============================================================================

/// An [`Iterator`] driving a [`Cursor`] to exhaustion.
///
/// Created by [`Cursor::into_traversal`] or
/// [`OrderedContainer::traverse`](crate::OrderedContainer::traverse).
///
/// # Examples
///
/// ```rust
/// use orderly::{OrderedContainer, TraversalOrder};
///
/// let container: OrderedContainer<i32> = [1, 2, 3, 4, 5].into_iter().collect();
/// let middle_out: Vec<i32> = container.traverse(TraversalOrder::MiddleOut).collect();
/// assert_eq!(middle_out, vec![3, 2, 4, 1, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct Traversal<C> {
    cursor: C,
}

impl<C> Traversal<C> {
    /// Wraps `cursor`.
    #[inline]
    pub const fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the underlying cursor.
    #[inline]
    pub const fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Unwraps the underlying cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Traversal<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.cursor.current().ok()?.clone();
        self.cursor.advance().ok()?;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<C> ExactSizeIterator for Traversal<C>
where
    C: Cursor,
    C::Item: Clone,
{
}

impl<C> FusedIterator for Traversal<C>
where
    C: Cursor,
    C::Item: Clone,
{
}
