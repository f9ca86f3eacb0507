//! Common traits for the stack and queue containers
//!
//! This module provides one trait per ordering discipline:
//!
//! - [`Stack`]: LIFO containers ([`ArrayStack`](crate::array_stack::ArrayStack),
//!   [`LinkedStack`](crate::linked_stack::LinkedStack))
//! - [`Queue`]: FIFO containers ([`ArrayQueue`](crate::array_queue::ArrayQueue),
//!   [`LinkedQueue`](crate::linked_queue::LinkedQueue))
//!
//! Both the array-backed and the linked variant of each discipline implement
//! the same trait, so code written against the trait works with either.
//! The [`MinHeap`](crate::min_heap::MinHeap) has a single implementation and
//! exposes its operations directly.

use std::fmt;

/// Error type for structural validation
///
/// Normal operations never fail: removing from an empty container yields
/// `None`. These errors are only produced by the `validate` methods, which
/// check that a container's internal invariants still hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// A heap slot holds a value smaller than its parent's
    HeapOrderViolated {
        /// Offending index into the heap's storage
        index: usize,
        /// Index of its parent
        parent: usize,
    },
    /// The maintained length disagrees with the number of linked nodes
    LengthMismatch {
        /// Length recorded by the container
        recorded: usize,
        /// Nodes actually reachable from the head
        counted: usize,
    },
    /// The queue's tail does not refer to its last node
    TailMismatch,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::HeapOrderViolated { index, parent } => {
                write!(
                    f,
                    "heap order violated: index {} is smaller than its parent at index {}",
                    index, parent
                )
            }
            ContainerError::LengthMismatch { recorded, counted } => {
                write!(
                    f,
                    "length mismatch: recorded {} but {} nodes are linked",
                    recorded, counted
                )
            }
            ContainerError::TailMismatch => {
                write!(f, "tail does not refer to the last linked node")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// LIFO (last in, first out) container
///
/// # Example
///
/// ```rust
/// use basic_containers::Stack;
/// use basic_containers::linked_stack::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// assert_eq!(stack.push(1), 1);
/// assert_eq!(stack.push(2), 2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub trait Stack<T> {
    /// Creates a new empty stack
    fn new() -> Self;

    /// Returns true if the stack holds no items
    fn is_empty(&self) -> bool;

    /// Returns the number of items on the stack
    fn len(&self) -> usize;

    /// Places an item on top of the stack, returning the new length
    ///
    /// # Time Complexity
    /// O(1), amortized for the array-backed stack.
    fn push(&mut self, item: T) -> usize;

    /// Removes and returns the top item, or `None` if the stack is empty
    ///
    /// # Time Complexity
    /// O(1)
    fn pop(&mut self) -> Option<T>;

    /// Returns the top item without removing it
    fn peek(&self) -> Option<&T>;
}

/// FIFO (first in, first out) container
///
/// # Example
///
/// ```rust
/// use basic_containers::Queue;
/// use basic_containers::array_queue::ArrayQueue;
///
/// let mut queue = ArrayQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.len(), 1);
/// ```
pub trait Queue<T> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no items
    fn is_empty(&self) -> bool;

    /// Returns the number of items in the queue
    fn len(&self) -> usize;

    /// Adds an item to the back of the queue, returning the new length
    ///
    /// # Time Complexity
    /// O(1), amortized for the array-backed queue.
    fn enqueue(&mut self, item: T) -> usize;

    /// Removes and returns the front item, or `None` if the queue is empty
    ///
    /// # Time Complexity
    /// - ArrayQueue: O(n), the remaining items shift one slot left
    /// - LinkedQueue: O(1)
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the front item without removing it
    fn front(&self) -> Option<&T>;
}
