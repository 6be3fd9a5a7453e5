//! First-in first-out queue.

use std::collections::VecDeque;
use std::fmt;

use super::ReadyQueue;

/// Strict insertion-order queue.
///
/// Elements leave in the order they entered; field values are never
/// consulted. `enqueue`/`dequeue` are O(1) amortized.
#[derive(Clone, Default)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends to the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the head.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Head element, without removal.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of queued elements.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Send + fmt::Debug> ReadyQueue<T> for FifoQueue<T> {
    fn kind(&self) -> &'static str {
        "queue"
    }

    fn push(&mut self, item: T) {
        self.enqueue(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn peek(&self) -> Option<&T> {
        FifoQueue::peek(self)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for FifoQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
