/// Sorts a slice in ascending order, in place, using bubble sort.
///
/// Adjacent elements are compared and swapped until the slice is ordered.
/// Empty and single-element slices are already sorted and are left alone.
///
/// # Complexity
///
/// This operation should compute in *O*(*n*²) time and *O*(1) space.
///
/// # Examples
///
/// ```
/// use singly_list::algorithms::bubble_sort;
///
/// let mut numbers = [5, 3, 4, 1, 2];
/// bubble_sort(&mut numbers);
/// assert_eq!(numbers, [1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len {
        // after pass `i`, the last `i` positions hold their final values
        for j in 0..len - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
            }
        }
    }
}

/// Sorts a slice in ascending order using bubble sort, returning a new
/// sorted vector and leaving the input untouched.
///
/// # Complexity
///
/// This operation should compute in *O*(*n*²) time and *O*(*n*) space, for
/// the returned copy.
///
/// # Examples
///
/// ```
/// use singly_list::algorithms::bubble_sorted;
///
/// let numbers = [5, 3, 4, 1, 2];
/// assert_eq!(bubble_sorted(&numbers), vec![1, 2, 3, 4, 5]);
/// assert_eq!(numbers, [5, 3, 4, 1, 2]);
/// ```
pub fn bubble_sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut elements = items.to_vec();
    bubble_sort(&mut elements);
    elements
}

#[cfg(test)]
mod tests {
    use super::{bubble_sort, bubble_sorted};

    #[test]
    fn sort_in_place() {
        let mut items = [5, 3, 4, 1, 2];
        bubble_sort(&mut items);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_edge_cases() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);
        assert_eq!(empty, []);

        let mut single = [1];
        bubble_sort(&mut single);
        assert_eq!(single, [1]);

        let mut sorted = [1, 2, 3];
        bubble_sort(&mut sorted);
        assert_eq!(sorted, [1, 2, 3]);

        let mut reversed = [5, 4, 3, 2, 1];
        bubble_sort(&mut reversed);
        assert_eq!(reversed, [1, 2, 3, 4, 5]);

        let mut duplicates = [2, 1, 2, 1, 1];
        bubble_sort(&mut duplicates);
        assert_eq!(duplicates, [1, 1, 1, 2, 2]);
    }

    #[test]
    fn sorted_copy_leaves_input_unchanged() {
        let items = vec![5, 3, 4, 1, 2];
        let sorted = bubble_sorted(&items);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(items, vec![5, 3, 4, 1, 2]);
    }

    #[test]
    fn sorted_copy_strings() {
        let items = ["cherry", "apple", "banana"];
        assert_eq!(bubble_sorted(&items), vec!["apple", "banana", "cherry"]);
    }
}
