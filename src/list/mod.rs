use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::node::{self, Node};
use crate::{IntoIter, Iter, OutOfBounds};

pub mod iterator;

/// The `LinkedList` is a singly-linked list with owned nodes and a cached
/// tail. Pushing to the front and appending to the back compute in constant
/// time; accessing or removing elements at any other position takes *O*(*n*)
/// time.
///
/// The `LinkedList` contains:
/// - a pointer `head` that owns the whole chain of nodes;
/// - a pointer `tail` that refers to the last node of the chain without
///   owning it. It is reassigned by every mutation that changes the last
///   node, so appending never traverses the chain.
///
/// Indexed operations ([`insert`], [`remove`]) report a position outside the
/// list bounds as an [`OutOfBounds`] error instead of panicking. Removals
/// from an empty list are not errors; they return `None`.
///
/// [`insert`]: LinkedList::insert
/// [`remove`]: LinkedList::remove
/// [`OutOfBounds`]: crate::OutOfBounds
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> LinkedList<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    /// Returns the node at a 0-based position, or `None` if the position is
    /// past the last node. Traversal is linear from `head`.
    pub(crate) fn node_at(&self, at: usize) -> Option<NonNull<Node<T>>> {
        let mut cursor = self.head?;
        for _ in 0..at {
            // SAFETY: every node reachable from `head` is alive and owned
            // by this list.
            cursor = unsafe { cursor.as_ref().next? };
        }
        Some(cursor)
    }

    fn out_of_bounds(&self, index: usize) -> OutOfBounds {
        OutOfBounds {
            index,
            len: self.len(),
        }
    }
}

impl<T> LinkedList<T> {
    /// Create an empty `LinkedList`.
    ///
    /// # Examples
    /// ```
    /// use singly_list::LinkedList;
    /// let list: LinkedList<u32> = LinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `LinkedList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `LinkedList`, counted by walking the chain
    /// from `head`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time; the list does not
    /// cache its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        // SAFETY: the chain is acyclic and fully owned by this list.
        unsafe { node::chain_len(self.head) }
    }

    /// Removes all elements from the `LinkedList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.front(), None);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` stays alive while the list is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the back element through the tail cache, or
    /// `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` refers to the last node of the chain, which stays
        // alive while the list is borrowed.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Adds an element first in the list. If the list was empty, the new
    /// node becomes the tail as well.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let mut node = Node::new_detached(elt);
        // SAFETY: `node` is freshly allocated and not yet linked anywhere.
        unsafe { node.as_mut().next = self.head };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
    }

    /// Appends an element to the back of the list, delegating to
    /// [`push_front`] when the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time, thanks to the tail
    /// cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    ///
    /// [`push_front`]: LinkedList::push_front
    pub fn push_back(&mut self, elt: T) {
        match self.tail {
            None => self.push_front(elt),
            Some(mut tail) => {
                let node = Node::new_detached(elt);
                // SAFETY: `tail` is the last node of the chain owned by this
                // list; linking a detached node after it keeps the chain
                // acyclic.
                unsafe { tail.as_mut().next = Some(node) };
                self.tail = Some(node);
            }
        }
    }

    /// Adds an element at the given position in the list. Position `0`
    /// behaves as [`push_front`]; position `len` appends and advances the
    /// tail.
    ///
    /// Positions greater than `len` are reported as [`OutOfBounds`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinkedList::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.insert(2, 4), Ok(()));
    /// assert_eq!(list.insert(4, 5), Ok(()));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    ///
    /// [`push_front`]: LinkedList::push_front
    /// [`OutOfBounds`]: crate::OutOfBounds
    pub fn insert(&mut self, at: usize, elt: T) -> Result<(), OutOfBounds> {
        if at == 0 {
            self.push_front(elt);
            return Ok(());
        }
        let mut prev = match self.node_at(at - 1) {
            Some(prev) => prev,
            None => return Err(self.out_of_bounds(at)),
        };
        // SAFETY: `prev` is a live node of this list and `node` is freshly
        // allocated; after splicing, every node is reachable exactly once.
        unsafe {
            let mut node = Node::new_detached(elt);
            node.as_mut().next = prev.as_ref().next;
            prev.as_mut().next = Some(node);
            if self.tail == Some(prev) {
                self.tail = Some(node);
            }
        }
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. When the last remaining element is removed, the tail cache is
    /// reset.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is owned by this list; after advancing `self.head`
        // it is unreachable from the chain and is freed exactly once.
        unsafe {
            self.head = head.as_ref().next;
            if self.head.is_none() {
                self.tail = None;
            }
            Some(Node::into_element(head))
        }
    }

    /// Removes the element at the given position and returns it.
    ///
    /// Position `0` behaves as [`pop_front`], so removing from an empty list
    /// is `Ok(None)` rather than an error. Any other position must satisfy
    /// `at < len` and is reported as [`OutOfBounds`] otherwise — the bounds
    /// are validated before any relinking happens. If the last node is
    /// removed, its predecessor becomes the new tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = LinkedList::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), Ok(Some(2)));
    /// assert_eq!(list.remove(1), Ok(Some(3)));
    /// assert_eq!(list.back(), Some(&1));
    /// assert_eq!(list.remove(0), Ok(Some(1)));
    /// assert_eq!(list.remove(0), Ok(None));
    /// ```
    ///
    /// [`pop_front`]: LinkedList::pop_front
    /// [`OutOfBounds`]: crate::OutOfBounds
    pub fn remove(&mut self, at: usize) -> Result<Option<T>, OutOfBounds> {
        if at == 0 {
            return Ok(self.pop_front());
        }
        let mut prev = match self.node_at(at - 1) {
            Some(prev) => prev,
            None => return Err(self.out_of_bounds(at)),
        };
        // SAFETY: `prev` is a live node of this list; after relinking, the
        // removed node is unreachable from the chain and is freed exactly
        // once.
        unsafe {
            let target = match prev.as_ref().next {
                Some(target) => target,
                None => return Err(self.out_of_bounds(at)),
            };
            prev.as_mut().next = target.as_ref().next;
            if self.tail == Some(target) {
                self.tail = Some(prev);
            }
            Ok(Some(Node::into_element(target)))
        }
    }

    /// Removes the last element from the list and returns it, or `None` if
    /// it is empty. A single-element list delegates to [`pop_front`];
    /// otherwise the walk stops at the second-to-last node, which becomes
    /// the new tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time; a singly-linked tail
    /// cache cannot step backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.pop_back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    ///
    /// [`pop_front`]: LinkedList::pop_front
    pub fn pop_back(&mut self) -> Option<T> {
        // covers the empty and the single-element list; `pop_front` resets
        // the tail cache
        if self.head == self.tail {
            return self.pop_front();
        }
        // SAFETY: the list holds at least two nodes here, so the walk below
        // reaches a node whose successor is the last one; every node
        // visited is alive and owned by this list.
        unsafe {
            let mut prev = self.head?;
            let mut curr = prev.as_ref().next?;
            while let Some(next) = curr.as_ref().next {
                prev = curr;
                curr = next;
            }
            prev.as_mut().next = None;
            self.tail = Some(prev);
            Some(Node::into_element(curr))
        }
    }

    /// Returns `true` if the `LinkedList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

/// Renders the list as its chain of elements joined by ` -> `, or the fixed
/// marker `Empty list` when there is nothing to render.
///
/// # Examples
///
/// ```
/// use singly_list::LinkedList;
/// use std::iter::FromIterator;
///
/// let list = LinkedList::from_iter([5, 10, 20]);
/// assert_eq!(list.to_string(), "5 -> 10 -> 20");
///
/// let empty: LinkedList<i32> = LinkedList::new();
/// assert_eq!(empty.to_string(), "Empty list");
/// ```
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty list");
        }
        // SAFETY: the chain is acyclic and fully owned by this list.
        unsafe { node::fmt_chain(self.head, f) }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}

unsafe impl<T: Sync> Sync for LinkedList<T> {}

// Ensure that `LinkedList` and its read-only iterators are covariant in
// their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: LinkedList<&'static str>) -> LinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::LinkedList;
    use crate::OutOfBounds;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &LinkedList<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = LinkedList::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = LinkedList::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        // the tail cache must reset when the list empties
        assert_eq!(list.back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.back(), Some(&1));

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_pop_front_is_stack_like() {
        let mut list = LinkedList::new();
        list.push_front(7);
        assert_eq!(list.pop_front(), Some(7));
        assert!(list.is_empty());
    }

    #[test]
    fn list_append_preserves_order() {
        let mut list = LinkedList::new();
        list.push_back('a');
        list.push_back('b');
        list.push_back('x');
        list_eq(&list, ['a', 'b', 'x']);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = LinkedList::from_iter(0..10);
        assert_eq!(list.insert(5, 10), Ok(()));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(Some(9)));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        assert_eq!(list.insert(0, 11), Ok(()));
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(Some(11)));
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        // inserting at `len` appends and must advance the tail
        assert_eq!(list.insert(10, 12), Ok(()));
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn list_insert_front_is_push_front() {
        let mut list = LinkedList::from_iter([2, 3]);
        assert_eq!(list.insert(0, 1), Ok(()));
        list_eq(&list, [1, 2, 3]);

        let mut empty = LinkedList::new();
        assert_eq!(empty.insert(0, 1), Ok(()));
        assert_eq!(empty.front(), Some(&1));
        assert_eq!(empty.back(), Some(&1));
    }

    #[test]
    fn list_out_of_bounds() {
        let mut list = LinkedList::from_iter([1, 2, 3]);

        assert_eq!(list.insert(4, 9), Err(OutOfBounds { index: 4, len: 3 }));
        assert_eq!(list.remove(3), Err(OutOfBounds { index: 3, len: 3 }));
        // a failed operation must leave the list untouched
        list_eq(&list, [1, 2, 3]);
        assert_eq!(list.back(), Some(&3));

        let mut empty = LinkedList::<i32>::new();
        assert_eq!(empty.insert(1, 9), Err(OutOfBounds { index: 1, len: 0 }));
        assert_eq!(empty.remove(1), Err(OutOfBounds { index: 1, len: 0 }));
        assert_eq!(empty.remove(0), Ok(None));
    }

    #[test]
    fn list_remove_last_updates_tail() {
        let mut list = LinkedList::from_iter([1, 2, 3]);
        assert_eq!(list.remove(2), Ok(Some(3)));
        assert_eq!(list.back(), Some(&2));
        list.push_back(4);
        list_eq(&list, [1, 2, 4]);
    }

    #[test]
    fn list_pop_back() {
        let mut list = LinkedList::from_iter([1, 2, 3]);
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn list_len_counts_by_traversal() {
        let mut list = LinkedList::new();
        let mut expected = 0_usize;
        for i in 0..5 {
            list.push_front(i);
            expected += 1;
            assert_eq!(list.len(), expected);
        }
        for i in 5..8 {
            list.push_back(i);
            expected += 1;
            assert_eq!(list.len(), expected);
        }
        assert_eq!(list.insert(3, 9), Ok(()));
        expected += 1;
        assert_eq!(list.len(), expected);

        while list.pop_front().is_some() {
            expected -= 1;
            assert_eq!(list.len(), expected);
        }
        assert_eq!(list.len(), 0);
        // traversal from `head` must visit exactly `len` nodes
        assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn list_display() {
        let mut list = LinkedList::new();
        assert_eq!(list.to_string(), "Empty list");

        list.push_back(5);
        assert_eq!(list.to_string(), "5");

        list.push_back(10);
        list.push_back(20);
        assert_eq!(list.to_string(), "5 -> 10 -> 20");
    }

    #[test]
    fn list_eq_and_clone() {
        let list = LinkedList::from_iter(0..5);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_ne!(list, LinkedList::from_iter(0..4));
        assert_ne!(list, LinkedList::new());
    }
}
