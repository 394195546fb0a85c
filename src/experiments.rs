//! An experimental FIFO queue with no `unsafe`.
//!
//! `GhostToken` brands every cell with the queue's lifetime so the borrow
//! checker can prove exclusive access, and `StaticRc` splits the ownership
//! of each cell into the two halves that refer to it: the predecessor's
//! forward link and the successor's back link (or the queue's own front and
//! back anchors at the ends). Kept private, like the pointer-based
//! [`Queue`](crate::Queue) it shadows.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct TokenQueue<'id, T> {
    links: [Option<CellPtr<'id, T>>; 2],
}

struct Cell<'id, T> {
    links: [Option<CellPtr<'id, T>>; 2],
    elem: T,
}

type CellPtr<'id, T> = Half<GhostCell<'id, Cell<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Cell<'id, T> {
    const NEXT: usize = 0;
    const PREV: usize = 1;

    fn new(elem: T) -> Self {
        let links = [None, None];
        Self { elem, links }
    }
}

impl<'id, T> Default for TokenQueue<'id, T> {
    fn default() -> Self {
        let links = [None, None];
        Self { links }
    }
}

impl<'id, T> TokenQueue<'id, T> {
    const FRONT: usize = 0;
    const BACK: usize = 1;

    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.links[Self::FRONT].is_none()
    }

    /// Adds an element to the back of the queue.
    ///
    /// The fresh cell is split into two halves: one becomes the previous
    /// back cell's forward link (or the front anchor of an empty queue), the
    /// other becomes the new back anchor.
    pub fn enqueue(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (left, right) = Full::split(Full::new(GhostCell::new(Cell::new(elem))));
        match self.links[Self::BACK].take() {
            Some(back) => {
                back.deref().borrow_mut(token).links[Cell::<T>::NEXT] = Some(left);
                right.deref().borrow_mut(token).links[Cell::<T>::PREV] = Some(back);
            }
            None => self.links[Self::FRONT] = Some(left),
        }
        self.links[Self::BACK] = Some(right);
    }

    /// Removes the element at the front of the queue and returns it, or
    /// `None` if the queue is empty.
    ///
    /// The two halves of the front cell are rejoined into full ownership
    /// before the element is moved out, so nothing is leaked or freed twice.
    pub fn dequeue(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let front = self.links[Self::FRONT].take()?;
        let other = match front.deref().borrow_mut(token).links[Cell::<T>::NEXT].take() {
            Some(next) => {
                let other = next.deref().borrow_mut(token).links[Cell::<T>::PREV]
                    .take()
                    .expect("a successor always holds its back link");
                self.links[Self::FRONT] = Some(next);
                other
            }
            None => self.links[Self::BACK]
                .take()
                .expect("a non-empty queue always has a back anchor"),
        };
        Some(Full::into_box(Full::join(other, front)).into_inner().elem)
    }

    /// Returns a reference to the element at the front of the queue without
    /// removing it, or `None` if the queue is empty.
    pub fn peek<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.links[Self::FRONT]
            .as_ref()
            .map(|front| &front.deref().borrow(token).elem)
    }
}
