//! Array-backed stack
//!
//! Items live in a contiguous vector whose last element is the top of the
//! stack, so every operation touches only the end of the vector.
//!
//! # Example
//!
//! ```rust
//! use basic_containers::Stack;
//! use basic_containers::array_stack::ArrayStack;
//!
//! let mut stack = ArrayStack::new();
//! stack.push(1);
//! stack.push(5);
//! stack.push(20);
//!
//! assert_eq!(stack.pop(), Some(20));
//! assert_eq!(stack.peek(), Some(&5));
//! assert_eq!(stack.len(), 2);
//! ```

use crate::traits::{ContainerError, Stack};

/// A LIFO stack over a `Vec`
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> for ArrayStack<T> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len()
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> ArrayStack<T> {
    /// Checks the stack's structural invariants
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

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut stack = ArrayStack::new();
        assert!(stack.is_empty());

        assert_eq!(stack.push("a"), 1);
        assert_eq!(stack.push("b"), 2);
        assert_eq!(stack.peek(), Some(&"b"));

        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_absent_payloads_count_as_items() {
        // Emptiness is decided by length, not by what the first slot holds
        let mut stack: ArrayStack<Option<i32>> = ArrayStack::new();
        stack.push(None);

        assert!(!stack.is_empty());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(&None));
        assert_eq!(stack.pop(), Some(None));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut stack = ArrayStack::new();
        assert!(stack.validate().is_ok());

        for i in 0..10 {
            stack.push(i);
            assert!(stack.validate().is_ok());
        }
        assert_eq!(stack.len(), 10);
    }
}
