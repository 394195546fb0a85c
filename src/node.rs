use std::fmt::{self, Display};
use std::ptr::NonNull;

/// A singly-linked cell: one element and an optional link to its successor.
///
/// `Node` carries no linking logic of its own; splicing and unlinking are
/// orchestrated by the container that owns the chain. The `next` link is a
/// raw pointer so that a container can also keep a non-owning tail reference
/// to the same node. Every node reachable from a container's head belongs to
/// that container, which frees the whole chain when dropped.
pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

impl<T> Node<T> {
    /// Allocate a detached node with the given element and no successor.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })))
    }

    /// Free a node and return its element.
    ///
    /// It is unsafe because `node` must have been allocated by
    /// [`Node::new_detached`] and must not be reachable from any live chain
    /// afterwards. The successor link is not followed; the caller keeps
    /// ownership of the rest of the chain.
    pub(crate) unsafe fn into_element(node: NonNull<Node<T>>) -> T {
        Box::from_raw(node.as_ptr()).element
    }
}

/// Count the nodes reachable from `head`.
///
/// It is unsafe because every node reachable from `head` must be alive, and
/// the chain must be acyclic or the walk does not terminate.
pub(crate) unsafe fn chain_len<T>(head: Option<NonNull<Node<T>>>) -> usize {
    let mut len = 0;
    let mut cursor = head;
    while let Some(node) = cursor {
        len += 1;
        cursor = node.as_ref().next;
    }
    len
}

/// Render the chain starting at `head` as `a -> b -> c`, with no trailing
/// separator. The walk is iterative, so long chains render without growing
/// the call stack.
///
/// It is unsafe under the same conditions as [`chain_len`].
pub(crate) unsafe fn fmt_chain<T: Display>(
    head: Option<NonNull<Node<T>>>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut cursor = head;
    while let Some(node) = cursor {
        let node = node.as_ref();
        node.element.fmt(f)?;
        if node.next.is_some() {
            f.write_str(" -> ")?;
        }
        cursor = node.next;
    }
    Ok(())
}
