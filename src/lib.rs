//! # orderly
//!
//! An insertion-ordered container that can be walked in six canonical orders
//! without maintaining sorted copies by hand.
//!
//! ## Overview
//!
//! [`OrderedContainer`] stores elements in the order they are added
//! (duplicates allowed) and hands out cursors for:
//!
//! - **Ascending** / **Descending**: sorted smallest-first or largest-first
//! - **Side-cross**: sorted, alternating between the lowest and highest remaining values
//! - **Reverse**: insertion order, last element first
//! - **Insertion**: insertion order
//! - **Middle-out**: insertion order, starting at the centre and expanding outward
//!
//! Every cursor owns an immutable [`Snapshot`] captured when it is created, so
//! later `add`/`remove` calls never disturb a traversal in flight.
//!
//! ## Example
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let mut container = OrderedContainer::new();
//! for value in [7, 15, 6, 1, 2] {
//!     container.add(value);
//! }
//!
//! let side_cross: Vec<i32> = container.traverse(TraversalOrder::SideCross).collect();
//! assert_eq!(side_cross, vec![1, 15, 2, 7, 6]);
//!
//! let mut cursor = container.begin_middle_out();
//! assert_eq!(cursor.current(), Ok(&6));
//! cursor.advance()?;
//! assert_eq!(cursor.current(), Ok(&15));
//! # Ok::<(), orderly::ContainerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use orderly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::OrderedContainer;
    pub use crate::cursor::{Cursor, OrderCursor, Position, Traversal};
    pub use crate::error::ContainerError;
    pub use crate::order::TraversalOrder;
}

pub mod container;
pub mod cursor;
pub mod error;
pub mod order;
pub mod snapshot;

pub use container::OrderedContainer;
pub use cursor::{
    AscendingCursor, Cursor, DescendingCursor, InsertionCursor, MiddleOutCursor, OrderCursor,
    Position, ReverseCursor, SideCrossCursor, Traversal,
};
pub use error::{ContainerError, Result};
pub use order::{ParseTraversalOrderError, TraversalOrder};
pub use snapshot::Snapshot;
