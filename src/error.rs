use thiserror::Error;

/// The error returned when an indexed list operation names a position
/// outside the list bounds.
///
/// `index` is the offending position and `len` is the length of the list at
/// the time of the call. [`insert`] accepts positions in `0..=len`;
/// [`remove`] accepts positions in `0..len` (except position `0`, which is
/// an empty-structure query, not an error).
///
/// # Examples
///
/// ```
/// use singly_list::{LinkedList, OutOfBounds};
/// use std::iter::FromIterator;
///
/// let mut list = LinkedList::from_iter([1, 2, 3]);
///
/// assert_eq!(list.insert(7, 9), Err(OutOfBounds { index: 7, len: 3 }));
/// assert_eq!(list.remove(3), Err(OutOfBounds { index: 3, len: 3 }));
/// ```
///
/// [`insert`]: crate::LinkedList::insert
/// [`remove`]: crate::LinkedList::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of bounds for a list of length {len}")]
pub struct OutOfBounds {
    pub index: usize,
    pub len: usize,
}
