//! Singly-linked node shared by the linked stack and linked queue
//!
//! Nodes are heap-allocated and referenced through `NonNull`. Ownership runs
//! one way: whoever holds the link to a node (the container's `head`, or the
//! predecessor's `next`) owns it. A queue's `tail` is a second, non-owning
//! reference to the last node.

use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node on the heap and leaks it as a raw pointer
    ///
    /// The caller becomes responsible for eventually passing the pointer to
    /// [`Node::free`] (or [`Node::free_chain`]).
    pub(crate) fn alloc(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Frees a node, returning its payload and successor link
    ///
    /// # Safety
    /// `node` must come from [`Node::alloc`], must not have been freed, and no
    /// reference into it may outlive this call.
    pub(crate) unsafe fn free(node: NonNull<Node<T>>) -> (T, Link<T>) {
        let Node { value, next } = *unsafe { Box::from_raw(node.as_ptr()) };
        (value, next)
    }

    /// Frees every node reachable from `link`
    ///
    /// Iterative, so arbitrarily long chains cannot overflow the call stack.
    ///
    /// # Safety
    /// Every node in the chain must satisfy the requirements of [`Node::free`].
    pub(crate) unsafe fn free_chain(mut link: Link<T>) {
        while let Some(node) = link {
            let (_, next) = unsafe { Self::free(node) };
            link = next;
        }
    }

    /// Returns the number of nodes reachable from `link` and the last of them
    ///
    /// # Safety
    /// Every node in the chain must be live.
    pub(crate) unsafe fn walk_chain(link: Link<T>) -> (usize, Link<T>) {
        let mut count = 0;
        let mut last = None;
        let mut cursor = link;
        while let Some(node) = cursor {
            count += 1;
            last = Some(node);
            cursor = unsafe { node.as_ref().next };
        }
        (count, last)
    }
}
