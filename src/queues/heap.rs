//! Binary-heap priority queue.
//!
//! # Algorithm
//!
//! Dense array heap. For index `i`, the parent is `(i - 1) / 2` and the
//! children are `2i + 1` and `2i + 2`.
//!
//! - `push`: append, then sift up while the parent ranks after the node.
//! - `pop`: swap root with the last element, shrink, sift the new root down,
//!   swapping with whichever child ranks first until no child does.
//!
//! # Tie-Breaking
//! Elements the comparator considers equal come out in an order decided by
//! the swap pattern alone. That order is **not** insertion-stable. Callers
//! that need a deterministic order must fold a secondary key into the
//! comparator (see `dispatching::TieBreak`).
//!
//! # Complexity
//! `push`/`pop`: O(log n). `peek`/`len`: O(1).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::ReadyQueue;

/// Ordering function: `Less` means the left element ranks first.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Which end of the comparator's order the heap serves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrientation {
    /// Smallest element first.
    Min,
    /// Largest element first (inverted comparator).
    Max,
}

/// Binary-heap priority queue with a caller-supplied comparator.
///
/// # Example
/// ```
/// use cpu_sched_sim::queues::{PriorityQueue, ReadyQueue};
///
/// let mut heap = PriorityQueue::max(|a: &i32, b: &i32| a.cmp(b));
/// for v in [3, 9, 1] {
///     heap.push(v);
/// }
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.peek(), Some(&3));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
    compare: Comparator<T>,
    orientation: HeapOrientation,
}

impl<T> PriorityQueue<T> {
    /// Creates a min-oriented heap: the element `compare` ranks lowest comes first.
    pub fn min<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            heap: Vec::new(),
            compare: Arc::new(compare),
            orientation: HeapOrientation::Min,
        }
    }

    /// Creates a max-oriented heap by inverting `compare`.
    pub fn max<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            heap: Vec::new(),
            compare: Arc::new(move |a: &T, b: &T| compare(a, b).reverse()),
            orientation: HeapOrientation::Max,
        }
    }

    /// Heap orientation.
    pub fn orientation(&self) -> HeapOrientation {
        self.orientation
    }

    /// Inserts an element. O(log n).
    pub fn insert(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the first-ranked element. O(log n).
    pub fn extract(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// First-ranked element, without removal. O(1).
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Underlying array in heap layout.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Checks the heap property: no child ranks strictly before its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| {
            let parent = (i - 1) / 2;
            (self.compare)(&self.heap[parent], &self.heap[i]) != Ordering::Greater
        })
    }

    /// Whether `a` should sit above `b`.
    #[inline]
    fn ranks_after(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.heap[a], &self.heap[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.ranks_after(parent, index) {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut first = index;

            if left < size && self.ranks_after(first, left) {
                first = left;
            }
            if right < size && self.ranks_after(first, right) {
                first = right;
            }
            if first == index {
                break;
            }
            self.heap.swap(index, first);
            index = first;
        }
    }
}

impl<T: Send + fmt::Debug> ReadyQueue<T> for PriorityQueue<T> {
    fn kind(&self) -> &'static str {
        match self.orientation {
            HeapOrientation::Min => "min-heap",
            HeapOrientation::Max => "max-heap",
        }
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.extract()
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.heap.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("orientation", &self.orientation)
            .field("heap", &self.heap)
            .finish()
    }
}
