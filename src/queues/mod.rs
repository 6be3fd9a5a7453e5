//! Ready-set containers.
//!
//! Two interchangeable containers share the [`ReadyQueue`] contract:
//!
//! - [`PriorityQueue`]: binary heap ordered by a caller-supplied comparator,
//!   in min or max orientation.
//! - [`FifoQueue`]: strict insertion order.
//!
//! Taking from an empty container yields `None`; it is a normal "nothing to
//! dispatch" signal, never an error.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6.5 (Priority Queues)

mod fifo;
mod heap;

pub use fifo::FifoQueue;
pub use heap::{Comparator, HeapOrientation, PriorityQueue};

/// Common contract of the ready-set containers.
pub trait ReadyQueue<T>: Send + std::fmt::Debug {
    /// Container name (e.g., "min-heap").
    fn kind(&self) -> &'static str;

    /// Adds an element.
    fn push(&mut self, item: T);

    /// Removes and returns the element ranked first, if any.
    fn pop(&mut self) -> Option<T>;

    /// Returns the element ranked first without removing it.
    fn peek(&self) -> Option<&T>;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Whether the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Raw storage layout (heap array or queue order), for display.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}
