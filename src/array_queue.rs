//! Array-backed queue
//!
//! Items are appended at the back of a vector and removed from the front.
//! Removing from the front shifts every remaining item one slot to the left,
//! so `dequeue` is O(n); [`LinkedQueue`](crate::linked_queue::LinkedQueue)
//! avoids that cost.

use crate::traits::{ContainerError, Queue};

/// A FIFO queue over a `Vec`
///
/// # Example
///
/// ```rust
/// use basic_containers::Queue;
/// use basic_containers::array_queue::ArrayQueue;
///
/// let mut queue = ArrayQueue::new();
/// assert_eq!(queue.enqueue(10), 1);
/// assert_eq!(queue.enqueue(20), 2);
/// assert_eq!(queue.enqueue(30), 3);
///
/// assert_eq!(queue.dequeue(), Some(10));
/// assert_eq!(queue.front(), Some(&20));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn enqueue(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len()
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    fn front(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<T> ArrayQueue<T> {
    /// Checks the queue's structural invariants
    ///
    /// The vector is the only storage and `len` reads it directly, so there
    /// is no separate state that can drift; this always succeeds.
    ///
    /// # Errors
    /// Never returns an error.
    pub fn validate(&self) -> Result<(), ContainerError> {
        Ok(())
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut queue = ArrayQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);

        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.front(), Some(&3));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut queue = ArrayQueue::new();
        queue.enqueue('x');
        queue.dequeue();

        assert_eq!(queue.enqueue('y'), 1);
        assert_eq!(queue.front(), Some(&'y'));
    }

    #[test]
    fn test_validate() {
        let mut queue = ArrayQueue::new();
        assert!(queue.validate().is_ok());

        for i in 0..10 {
            queue.enqueue(i);
            assert!(queue.validate().is_ok());
        }
        assert_eq!(queue.len(), 10);
    }
}
