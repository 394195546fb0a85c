use std::cmp::Ordering;

/// Performs a linear search for `needle` in `haystack` and returns the
/// index of the first match, or `None` if there is no match.
///
/// The haystack does not need to be sorted.
///
/// # Complexity
///
/// This operation should compute in *O*(*n*) time and *O*(1) space.
///
/// # Examples
///
/// ```
/// use singly_list::algorithms::linear_search;
///
/// assert_eq!(linear_search(&[1, 2, 3, 4], &3), Some(2));
/// assert_eq!(linear_search(&["apple", "banana", "cherry"], &"pear"), None);
/// ```
pub fn linear_search<T: PartialEq>(haystack: &[T], needle: &T) -> Option<usize> {
    haystack.iter().position(|value| value == needle)
}

/// Performs a binary search for `needle` in `haystack` and returns its
/// index, or `None` if it is not present.
///
/// The haystack must be sorted in ascending order, otherwise the result is
/// unspecified.
///
/// # Complexity
///
/// This operation should compute in *O*(log *n*) time and *O*(1) space.
///
/// # Examples
///
/// ```
/// use singly_list::algorithms::binary_search;
///
/// assert_eq!(binary_search(&[1, 2, 3, 4, 5], &3), Some(2));
/// assert_eq!(binary_search(&["apple", "banana", "cherry"], &"pear"), None);
/// ```
pub fn binary_search<T: Ord>(haystack: &[T], needle: &T) -> Option<usize> {
    let mut lower = 0;
    let mut upper = haystack.len();

    while lower < upper {
        // written this way so the midpoint cannot overflow
        let middle = lower + (upper - lower) / 2;
        match haystack[middle].cmp(needle) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => lower = middle + 1,
            Ordering::Greater => upper = middle,
        }
    }
    None
}

/// Performs a jump search (square root search) for `needle` in `haystack`
/// and returns its index, or `None` if it is not present.
///
/// The search advances in √*n*-sized jumps until it overshoots the needle,
/// then scans the last block linearly. The scan covers the block boundary
/// element itself, so needles sitting exactly on a jump position are found.
///
/// The haystack must be sorted in ascending order, otherwise the result is
/// unspecified.
///
/// # Complexity
///
/// This operation should compute in *O*(√*n*) time and *O*(1) space.
///
/// # Examples
///
/// ```
/// use singly_list::algorithms::jump_search;
///
/// assert_eq!(jump_search(&[1, 2, 3, 4, 5], &3), Some(2));
/// assert_eq!(jump_search(&[10, 20, 30, 40, 50], &25), None);
/// ```
pub fn jump_search<T: Ord>(haystack: &[T], needle: &T) -> Option<usize> {
    let len = haystack.len();
    let step = (len as f64).sqrt() as usize;
    let step = step.max(1);

    // jump until the element at the block boundary is no longer below the
    // needle, or the boundary leaves the haystack
    let mut index = step;
    while index < len && haystack[index] < *needle {
        index += step;
    }

    // scan the block, boundary element included
    let start = index - step;
    let stop = (index + 1).min(len);
    haystack[start..stop]
        .iter()
        .position(|value| value == needle)
        .map(|offset| start + offset)
}
