//! Linked-list stack
//!
//! A singly-linked chain of nodes whose head is the top of the stack. Each
//! push allocates one node in front of the head; each pop frees the head and
//! hands its payload to the caller.
//!
//! The length is kept in a counter rather than recounted by walking the
//! chain, so `len` and `push` are O(1). [`LinkedStack::validate`] walks the
//! chain and checks the counter against it.

use crate::node::{Link, Node};
use crate::traits::{ContainerError, Stack};
use std::fmt;
use std::marker::PhantomData;

/// A LIFO stack over singly-linked nodes
///
/// # Example
///
/// ```rust
/// use basic_containers::Stack;
/// use basic_containers::linked_stack::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// stack.push(10);
/// stack.push(20);
/// stack.push(30);
///
/// assert_eq!(stack.len(), 3);
/// assert_eq!(stack.pop(), Some(30));
/// assert_eq!(stack.peek(), Some(&20));
/// ```
pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// Nodes are owned exclusively through `head`, like a `Box` chain.
unsafe impl<T: Send> Send for LinkedStack<T> {}
unsafe impl<T: Sync> Sync for LinkedStack<T> {}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        unsafe { Node::free_chain(self.head.take()) }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) -> usize {
        self.head = Some(Node::alloc(item, self.head));
        self.len += 1;
        self.len
    }

    fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head came from Node::alloc and is owned solely by this stack
        let (value, next) = unsafe { Node::free(head) };
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    fn peek(&self) -> Option<&T> {
        // SAFETY: the node stays alive for as long as the stack is borrowed
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }
}

impl<T> LinkedStack<T> {
    /// Checks that the length counter matches the number of linked nodes
    ///
    /// # Errors
    /// Returns [`ContainerError::LengthMismatch`] if they disagree.
    pub fn validate(&self) -> Result<(), ContainerError> {
        let (counted, _) = unsafe { Node::walk_chain(self.head) };
        if counted != self.len {
            return Err(ContainerError::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = self.head;
        while let Some(node) = cursor {
            let node = unsafe { node.as_ref() };
            list.entry(&node.value);
            cursor = node.next;
        }
        list.finish()
    }
}
