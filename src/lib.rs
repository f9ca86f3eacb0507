//! Introductory container data structures
//!
//! This crate provides small, independently usable containers of the kind
//! found in a first data-structures course:
//!
//! - **MinHeap**: array-backed complete binary tree; O(1) `top`, O(log n) `insert` and `extract`
//! - **ArrayStack**: LIFO over a contiguous vector; O(1) amortized `push`, O(1) `pop`
//! - **LinkedStack**: LIFO over singly-linked nodes; O(1) `push` and `pop`
//! - **ArrayQueue**: FIFO over a contiguous vector; O(1) amortized `enqueue`, O(n) `dequeue`
//! - **LinkedQueue**: FIFO over singly-linked nodes with a tail pointer; O(1) `enqueue` and `dequeue`
//!
//! Operations on empty containers report "no value" through `None` rather than
//! panicking or returning an error.
//!
//! # Example
//!
//! ```rust
//! use basic_containers::min_heap::MinHeap;
//! use basic_containers::linked_queue::LinkedQueue;
//! use basic_containers::Queue;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(15);
//! heap.insert(5);
//! heap.insert(10);
//! assert_eq!(heap.top(), Some(5));
//! assert_eq!(heap.extract(), Some(5));
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.front(), Some(&"b"));
//! ```

pub mod array_queue;
pub mod array_stack;
pub mod linked_queue;
pub mod linked_stack;
pub mod min_heap;
mod node;
pub mod traits;

// Re-export the container traits for convenience
pub use traits::{ContainerError, Queue, Stack};
