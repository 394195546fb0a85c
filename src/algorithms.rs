//! Classic search and sort routines over slices.
//!
//! These are pure functions: they take a finite sequence (and a needle,
//! where it applies) and return an index or a fresh sequence. They share no
//! state with the node-based containers in this crate. A needle that is not
//! present is reported as `None`, never as an error.

pub mod search;
pub mod sort;

#[doc(inline)]
pub use search::{binary_search, jump_search, linear_search};
#[doc(inline)]
pub use sort::{bubble_sort, bubble_sorted};
