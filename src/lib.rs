//! This crate provides a singly-linked list and a FIFO queue with owned
//! nodes, both built from the same linked cell and both keeping a cached
//! tail for constant-time appending, plus a handful of classic search and
//! sort routines over slices.
//!
//! The [`LinkedList`] allows pushing and appending in constant time, and
//! inserting or removing elements at any position in *O*(*n*) time. The
//! [`Queue`] restricts the same chain to enqueue-at-back and
//! dequeue-at-front.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use singly_list::LinkedList;
//! use std::iter::FromIterator;
//!
//! let mut list = LinkedList::from_iter([10, 20]);
//!
//! list.push_front(5);
//! assert_eq!(list.to_string(), "5 -> 10 -> 20");
//!
//! assert_eq!(list.insert(2, 15), Ok(()));
//! assert_eq!(list.pop_front(), Some(5));
//! assert_eq!(list.pop_back(), Some(20));
//! assert_eq!(Vec::from_iter(list), vec![10, 15]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                  ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ───→ ┄┄ ───→     ║next (none)║
//!    ╟───────────╢           ╟───────────╢   Node 2, 3, ... ╟───────────╢
//!    ║ element T ║           ║ element T ║                  ║ element T ║
//!    ╚═══════════╝           ╚═══════════╝                  ╚═══════════╝
//!        Node 0 ←─┐              Node 1                  ┌→   Node N-1
//! ╔══════╦══════╗ │                                      │
//! ║ head ║ tail ║─┼──────────────────────────────────────┘
//! ╚══════╩══════╝ │
//!     List  └─────┘
//! ```
//! The `List` contains:
//! - a pointer `head` that owns the whole chain of nodes;
//! - a pointer `tail` that refers to the last node (the one with no
//!   successor) without owning it, so appending never walks the chain.
//!
//! Each node of the list `LinkedList<T>` is allocated on the heap, which
//! contains:
//! - the `next` pointer that points to the next node, or nothing if it is
//!   the last node in the list;
//! - the actual element `T` that depends on the element type of the list.
//!
//! `head` and `tail` are both empty exactly when the list is empty; every
//! mutation that changes the last node reassigns `tail` before returning.
//! The [`Queue`] shares this layout and these invariants, restricted to
//! FIFO operations.
//!
//! There is no length field: [`LinkedList::len`] and [`Queue::len`] count
//! by walking the chain.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] iterator, a plain forward
//! traversal of the chain (there are no double-ended or mutating
//! iterators).
//!
//! ## Examples
//!
//! ```
//! use singly_list::LinkedList;
//! use std::iter::FromIterator;
//!
//! let list = LinkedList::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//! ```
//!
//! # Errors
//!
//! Indexed operations validate their position argument and report a
//! position outside the list bounds as an [`OutOfBounds`] value instead of
//! panicking. Removals and reads from an empty structure are not errors;
//! they return `None`.
//!
//! ```
//! use singly_list::{LinkedList, OutOfBounds};
//!
//! let mut list = LinkedList::<i32>::new();
//! assert_eq!(list.insert(3, 7), Err(OutOfBounds { index: 3, len: 0 }));
//! assert_eq!(list.pop_front(), None);
//! ```
//!
//! # Algorithms
//!
//! The [`algorithms`] module carries pure search and sort functions over
//! slices: [`linear_search`], [`binary_search`], [`jump_search`],
//! [`bubble_sort`] and its copying variant [`bubble_sorted`]. They share no
//! state with the containers.
//!
//! ```
//! use singly_list::algorithms::{binary_search, bubble_sorted};
//!
//! assert_eq!(binary_search(&[1, 2, 3, 4, 5], &3), Some(2));
//! assert_eq!(bubble_sorted(&[5, 3, 4, 1, 2]), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! [`LinkedList`]: crate::LinkedList
//! [`Queue`]: crate::Queue
//! [`Iter`]: crate::Iter
//! [`OutOfBounds`]: crate::OutOfBounds
//! [`algorithms`]: crate::algorithms
//! [`linear_search`]: crate::algorithms::linear_search
//! [`binary_search`]: crate::algorithms::binary_search
//! [`jump_search`]: crate::algorithms::jump_search
//! [`bubble_sort`]: crate::algorithms::bubble_sort
//! [`bubble_sorted`]: crate::algorithms::bubble_sorted

#[doc(inline)]
pub use error::OutOfBounds;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use queue::Queue;

pub mod algorithms;
pub mod error;
pub mod list;
pub mod queue;

pub(crate) mod node;

mod experiments;
