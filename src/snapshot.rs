//! Immutable copies of container contents captured for traversal.
//!
//! A [`Snapshot`] is taken once, when a cursor is created, and is never
//! touched by later mutations of the container it came from. Sorting
//! strategies capture a reordered copy; the others capture the insertion
//! order as-is.
//!
//! The elements live behind an `Rc<[T]>`, so cloning a cursor shares its
//! snapshot instead of copying it.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A shared, immutable sequence of elements owned by one or more cursors.
///
/// # Examples
///
/// ```rust
/// use orderly::Snapshot;
///
/// let source = vec![5, 1, 8, 3];
/// let snapshot = Snapshot::sorted_by(&source, i32::cmp);
/// assert_eq!(snapshot.as_slice(), &[1, 3, 5, 8]);
/// assert_eq!(source, vec![5, 1, 8, 3]);
/// ```
pub struct Snapshot<T> {
    elements: Rc<[T]>,
}

impl<T: Clone> Snapshot<T> {
    /// Copies `elements` in their current order.
    #[must_use]
    pub fn capture(elements: &[T]) -> Self {
        Self {
            elements: Rc::from(elements),
        }
    }

    /// Copies `elements` and sorts the copy with `compare`.
    ///
    /// The sort is unstable: equal elements may appear in any relative order.
    #[must_use]
    pub fn sorted_by<F>(elements: &[T], compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = elements.to_vec();
        sorted.sort_unstable_by(compare);
        Self {
            elements: Rc::from(sorted),
        }
    }
}

impl<T> Snapshot<T> {
    /// Returns the number of captured elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing was captured.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the captured elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns `true` if both snapshots share the same allocation.
    #[inline]
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements)
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Rc::clone(&self.elements),
        }
    }
}

impl<T: PartialEq> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.elements == other.elements
    }
}

impl<T: Eq> Eq for Snapshot<T> {}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}
