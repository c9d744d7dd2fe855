//! A cursor whose traversal order is chosen at runtime.

use std::cmp::Ordering;

use super::{
    AscendingCursor, Cursor, DescendingCursor, InsertionCursor, MiddleOutCursor, ReverseCursor,
    SideCrossCursor,
};
use crate::error::Result;
use crate::order::TraversalOrder;

/// One of the six cursor types, tagged by its order.
///
/// Returned by [`OrderedContainer::begin`](crate::OrderedContainer::begin) and
/// [`OrderedContainer::end`](crate::OrderedContainer::end). Cursors of
/// different orders never compare equal.
///
/// # Examples
///
/// ```rust
/// use orderly::{Cursor, OrderCursor, TraversalOrder};
///
/// let elements = [3, 1, 2];
/// for order in TraversalOrder::ALL {
///     let cursor = OrderCursor::begin(order, &elements);
///     assert_eq!(cursor.order(), order);
///     assert_eq!(cursor.into_traversal().count(), 3);
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderCursor<T> {
    /// See [`AscendingCursor`].
    Ascending(AscendingCursor<T>),
    /// See [`DescendingCursor`].
    Descending(DescendingCursor<T>),
    /// See [`SideCrossCursor`].
    SideCross(SideCrossCursor<T>),
    /// See [`ReverseCursor`].
    Reverse(ReverseCursor<T>),
    /// See [`InsertionCursor`].
    Insertion(InsertionCursor<T>),
    /// See [`MiddleOutCursor`].
    MiddleOut(MiddleOutCursor<T>),
}

macro_rules! dispatch {
    ($cursor:expr, $inner:ident => $body:expr) => {
        match $cursor {
            OrderCursor::Ascending($inner) => $body,
            OrderCursor::Descending($inner) => $body,
            OrderCursor::SideCross($inner) => $body,
            OrderCursor::Reverse($inner) => $body,
            OrderCursor::Insertion($inner) => $body,
            OrderCursor::MiddleOut($inner) => $body,
        }
    };
}

impl<T: Clone + Ord> OrderCursor<T> {
    /// Creates the begin cursor of `order` over `elements`.
    #[must_use]
    pub fn begin(order: TraversalOrder, elements: &[T]) -> Self {
        Self::begin_by(order, elements, T::cmp)
    }

    /// Creates the end cursor of `order` over `elements`.
    #[must_use]
    pub fn end(order: TraversalOrder, elements: &[T]) -> Self {
        Self::end_by(order, elements, T::cmp)
    }
}

impl<T: Clone> OrderCursor<T> {
    /// Creates the begin cursor of `order`, sorting with `compare` when the
    /// order needs a sorted snapshot.
    ///
    /// `compare` is ignored by the reverse, insertion and middle-out orders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::{Cursor, OrderCursor, TraversalOrder};
    ///
    /// let values: Vec<f64> =
    ///     OrderCursor::begin_by(TraversalOrder::SideCross, &[2.5, 0.5, 1.5], f64::total_cmp)
    ///         .into_traversal()
    ///         .collect();
    /// assert_eq!(values, vec![0.5, 2.5, 1.5]);
    /// ```
    pub fn begin_by<F>(order: TraversalOrder, elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match order {
            TraversalOrder::Ascending => {
                Self::Ascending(AscendingCursor::begin_by(elements, compare))
            }
            TraversalOrder::Descending => {
                Self::Descending(DescendingCursor::begin_by(elements, compare))
            }
            TraversalOrder::SideCross => {
                Self::SideCross(SideCrossCursor::begin_by(elements, compare))
            }
            TraversalOrder::Reverse => Self::Reverse(ReverseCursor::begin(elements)),
            TraversalOrder::Insertion => Self::Insertion(InsertionCursor::begin(elements)),
            TraversalOrder::MiddleOut => Self::MiddleOut(MiddleOutCursor::begin(elements)),
        }
    }

    /// Creates the end cursor matching [`OrderCursor::begin_by`].
    pub fn end_by<F>(order: TraversalOrder, elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match order {
            TraversalOrder::Ascending => Self::Ascending(AscendingCursor::end_by(elements, compare)),
            TraversalOrder::Descending => {
                Self::Descending(DescendingCursor::end_by(elements, compare))
            }
            TraversalOrder::SideCross => Self::SideCross(SideCrossCursor::end_by(elements, compare)),
            TraversalOrder::Reverse => Self::Reverse(ReverseCursor::end(elements)),
            TraversalOrder::Insertion => Self::Insertion(InsertionCursor::end(elements)),
            TraversalOrder::MiddleOut => Self::MiddleOut(MiddleOutCursor::end(elements)),
        }
    }
}

impl<T> Cursor for OrderCursor<T> {
    type Item = T;

    fn order(&self) -> TraversalOrder {
        dispatch!(self, cursor => cursor.order())
    }

    fn current(&self) -> Result<&T> {
        dispatch!(self, cursor => cursor.current())
    }

    fn advance(&mut self) -> Result<()> {
        dispatch!(self, cursor => cursor.advance())
    }

    fn is_exhausted(&self) -> bool {
        dispatch!(self, cursor => cursor.is_exhausted())
    }

    fn remaining(&self) -> usize {
        dispatch!(self, cursor => cursor.remaining())
    }
}
