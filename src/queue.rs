use std::fmt::{self, Debug, Formatter};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::node::{self, Node};

/// The `Queue` is a first-in, first-out container built from the same
/// singly-linked nodes as [`LinkedList`]. Elements are enqueued at the back
/// and dequeued from the front, both in constant time thanks to the cached
/// tail.
///
/// The `Queue` contains:
/// - a pointer `head` that owns the whole chain of nodes; dequeueing
///   advances it;
/// - a pointer `tail` that refers to the last node without owning it, so
///   enqueueing never traverses the chain. It is reset whenever the queue
///   empties.
///
/// There is no indexed access of any kind; the only removal point is the
/// front, and the only insertion point is the back.
///
/// # Examples
///
/// ```
/// use singly_list::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(10);
/// queue.enqueue(20);
///
/// assert_eq!(queue.peek(), Some(&10));
/// assert_eq!(queue.dequeue(), Some(10));
/// assert_eq!(queue.dequeue(), Some(20));
/// assert_eq!(queue.dequeue(), None);
/// ```
///
/// [`LinkedList`]: crate::LinkedList
pub struct Queue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use singly_list::Queue;
    /// let queue: Queue<u32> = Queue::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.enqueue("foo");
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of queued elements, counted by walking the chain
    /// from `head`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time; the queue does not
    /// cache its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.len(), 0);
    ///
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        // SAFETY: the chain is acyclic and fully owned by this queue.
        unsafe { node::chain_len(self.head) }
    }

    /// Adds an element to the back of the queue. An element enqueued into an
    /// empty queue becomes both head and tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn enqueue(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.tail {
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
            Some(mut tail) => {
                // SAFETY: `tail` is the last node of the chain owned by this
                // queue; linking a detached node after it keeps the chain
                // acyclic.
                unsafe { tail.as_mut().next = Some(node) };
                self.tail = Some(node);
            }
        }
    }

    /// Removes the element at the front of the queue and returns it, or
    /// `None` if the queue is empty. When the last element is dequeued, the
    /// tail cache is reset.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.dequeue(), None);
    ///
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.dequeue(), Some('a'));
    /// assert_eq!(queue.dequeue(), Some('b'));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is owned by this queue; after advancing `self.head`
        // it is unreachable from the chain and is freed exactly once.
        unsafe {
            self.head = head.as_ref().next;
            if self.head.is_none() {
                self.tail = None;
            }
            Some(Node::into_element(head))
        }
    }

    /// Returns a reference to the element at the front of the queue without
    /// removing it, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use singly_list::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.peek(), None);
    ///
    /// queue.enqueue(10);
    /// assert_eq!(queue.peek(), Some(&10));
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: `head` stays alive while the queue is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_list();
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: the chain stays alive while the queue is borrowed.
            let node = unsafe { &*node.as_ptr() };
            f.entry(&node.element);
            cursor = node.next;
        }
        f.finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.enqueue(item));
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

unsafe impl<T: Send> Send for Queue<T> {}

unsafe impl<T: Sync> Sync for Queue<T> {}

#[cfg(test)]
mod tests {
    use crate::Queue;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn queue_create() {
        let queue = Queue::<i32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.dequeue(), Some('a'));
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn queue_peek_does_not_mutate() {
        let mut queue = Queue::from_iter([1, 2]);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn queue_len_counts_by_traversal() {
        let mut queue = Queue::new();
        for i in 0..6 {
            queue.enqueue(i);
            assert_eq!(queue.len(), i + 1);
        }
        for i in (0..6).rev() {
            queue.dequeue();
            assert_eq!(queue.len(), i);
        }
    }

    #[test]
    fn queue_tail_resets_when_emptied() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));
        assert!(queue.is_empty());

        // a fresh enqueue after draining must rebuild head and tail
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.peek(), Some(&2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
    }

    #[test]
    fn queue_interleaved() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn queue_debug() {
        let queue = Queue::from_iter([1, 2, 3]);
        assert_eq!(format!("{:?}", queue), "[1, 2, 3]");
        assert_eq!(format!("{:?}", Queue::<i32>::new()), "[]");
    }

    #[test]
    fn queue_drop() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl<'a> Drop for DropChecker<'a> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut queue = Queue::new();
        for value in 1..=3 {
            queue.enqueue(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(queue);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }
}
