//! Error types for container mutation and cursor traversal.
//!
//! Every fallible operation in this crate reports failure through
//! [`ContainerError`]. Errors are raised synchronously at the offending call
//! and never leave the container partially modified.
//!
//! # Examples
//!
//! ```rust
//! use orderly::{ContainerError, OrderedContainer};
//!
//! let mut container = OrderedContainer::new();
//! container.add(1);
//!
//! assert_eq!(container.remove(&2), Err(ContainerError::NotFound));
//! assert_eq!(container.size(), 1);
//! ```

use thiserror::Error;

use crate::order::TraversalOrder;

/// Errors produced by [`OrderedContainer`](crate::OrderedContainer) and its cursors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `remove` was called with a value that matched no stored element.
    #[error("element not found in container")]
    NotFound,

    /// `current` or `advance` was called on an exhausted cursor.
    #[error("cannot access {order} cursor past the end of the sequence")]
    EndOfSequence {
        /// The traversal order of the cursor that was exhausted.
        order: TraversalOrder,
    },
}

impl ContainerError {
    /// Builds an [`ContainerError::EndOfSequence`] for the given order.
    #[inline]
    #[must_use]
    pub const fn end_of_sequence(order: TraversalOrder) -> Self {
        Self::EndOfSequence { order }
    }
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ContainerError>;
