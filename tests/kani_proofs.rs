//! Kani verification proofs for the containers
//!
//! Kani is AWS's model checker for Rust. It checks every execution up to the
//! given unwind bounds, so these harnesses keep their inputs small.
//!
//! To run these proofs:
//!   cargo kani

#[allow(unused_imports)]
use basic_containers::array_queue::ArrayQueue;
#[allow(unused_imports)]
use basic_containers::linked_queue::LinkedQueue;
#[allow(unused_imports)]
use basic_containers::linked_stack::LinkedStack;
#[allow(unused_imports)]
use basic_containers::min_heap::MinHeap;
#[allow(unused_imports)]
use basic_containers::{Queue, Stack};

/// Proof that any three inserts leave the minimum on top
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heap_top_is_minimum() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();

    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    assert!(heap.validate().is_ok());
    assert!(heap.top() == Some(a.min(b).min(c)));
}

/// Proof that extract returns values in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heap_extract_order() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    for _ in 0..4 {
        heap.insert(kani::any());
    }

    let mut last = 0u8;
    while let Some(value) = heap.extract() {
        assert!(value >= last);
        last = value;
    }
    assert!(heap.is_empty());
}

/// Proof that extract and top on an empty heap yield None
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_is_absent() {
    let mut heap: MinHeap<i32> = MinHeap::new();
    assert!(heap.top().is_none());
    assert!(heap.extract().is_none());
}

/// Proof that push followed by pop returns the pushed item and restores len
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_linked_stack_push_pop() {
    let mut stack: LinkedStack<u32> = LinkedStack::new();
    stack.push(kani::any());
    let before = stack.len();

    let item: u32 = kani::any();
    assert!(stack.push(item) == before + 1);
    assert!(stack.pop() == Some(item));
    assert!(stack.len() == before);
}

/// Proof that a drained linked queue resets its tail and can be refilled
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_linked_queue_tail_reset() {
    let mut queue: LinkedQueue<u32> = LinkedQueue::new();
    let first: u32 = kani::any();
    let second: u32 = kani::any();

    queue.enqueue(first);
    assert!(queue.dequeue() == Some(first));
    assert!(queue.validate().is_ok());

    assert!(queue.enqueue(second) == 1);
    assert!(queue.front() == Some(&second));
    assert!(queue.validate().is_ok());
}

/// Proof that the array queue dequeues in enqueue order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_array_queue_fifo() {
    let mut queue: ArrayQueue<u8> = ArrayQueue::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();

    queue.enqueue(a);
    queue.enqueue(b);
    assert!(queue.dequeue() == Some(a));
    assert!(queue.dequeue() == Some(b));
    assert!(queue.dequeue().is_none());
}
