//! Linked-list queue with a tail pointer
//!
//! Items are dequeued from the head and enqueued after the tail. Keeping a
//! direct reference to the last node makes both ends O(1), unlike
//! [`ArrayQueue`](crate::array_queue::ArrayQueue) which shifts on every
//! dequeue.
//!
//! Invariants, checked by [`LinkedQueue::validate`]:
//! - an empty queue has neither head nor tail
//! - a one-item queue's head and tail are the same node
//! - the tail is the last node, i.e. its `next` is `None`
//! - `len` equals the number of linked nodes

use crate::node::{Link, Node};
use crate::traits::{ContainerError, Queue};
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// A FIFO queue over singly-linked nodes
///
/// # Example
///
/// ```rust
/// use basic_containers::Queue;
/// use basic_containers::linked_queue::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// assert_eq!(queue.enqueue(10), 1);
/// queue.enqueue(20);
/// queue.enqueue(30);
/// assert_eq!(queue.enqueue(40), 4);
///
/// assert_eq!(queue.dequeue(), Some(10));
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.front(), Some(&20));
/// ```
pub struct LinkedQueue<T> {
    head: Link<T>,
    /// Non-owning; the node is owned by its predecessor (or `head`)
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.tail = None;
        unsafe { Node::free_chain(self.head.take()) }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn new() -> Self {
        Self {
            head: None,
            tail: None,
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

    fn enqueue(&mut self, item: T) -> usize {
        let node = Node::alloc(item, None);
        match self.tail {
            None => self.head = Some(node),
            // SAFETY: tail is the live last node of this queue
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
        self.len
    }

    fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head came from Node::alloc and is owned solely by this queue
        let (value, next) = unsafe { Node::free(head) };
        self.head = next;
        self.len -= 1;

        if self.head.is_none() {
            // The freed node was also the tail
            self.tail = None;
            trace!("linked queue drained, tail reset");
        }

        Some(value)
    }

    fn front(&self) -> Option<&T> {
        // SAFETY: the node stays alive for as long as the queue is borrowed
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }
}

impl<T> LinkedQueue<T> {
    /// Checks the head/tail/length invariants
    ///
    /// # Errors
    /// - [`ContainerError::LengthMismatch`] if `len` disagrees with the chain
    /// - [`ContainerError::TailMismatch`] if the tail is not the last node
    pub fn validate(&self) -> Result<(), ContainerError> {
        let (counted, last) = unsafe { Node::walk_chain(self.head) };
        if counted != self.len {
            return Err(ContainerError::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        if last != self.tail {
            return Err(ContainerError::TailMismatch);
        }
        Ok(())
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
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
