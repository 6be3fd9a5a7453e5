//! Ready-queue construction for a policy.
//!
//! Only the container of the active policy is kept. Switching policy, or
//! removing a waiting task, rebuilds it from the registry's ready set.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::rules::{HighestPriority, ShortestJob};
use super::{DispatchingRule, ReadyEntry};
use crate::models::SchedulingPolicy;
use crate::queues::{FifoQueue, HeapOrientation, PriorityQueue, ReadyQueue};

/// How heap ties are resolved when the rule's key is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Leave ties to the heap's swap pattern. Not insertion-stable.
    HeapOrder,
    /// Earlier submission first (by task id).
    #[default]
    ArrivalOrder,
}

/// Builds the container for `policy`, loaded with `entries` in the given order.
///
/// `entries` should be in submission order so FCFS dispatches by arrival.
pub fn build_ready_queue<I>(
    policy: SchedulingPolicy,
    tie_break: TieBreak,
    entries: I,
) -> Box<dyn ReadyQueue<ReadyEntry>>
where
    I: IntoIterator<Item = ReadyEntry>,
{
    let mut queue: Box<dyn ReadyQueue<ReadyEntry>> = match policy {
        SchedulingPolicy::ShortestJob => Box::new(heap_for(ShortestJob, tie_break)),
        SchedulingPolicy::PriorityBased => Box::new(heap_for(HighestPriority, tie_break)),
        SchedulingPolicy::Fcfs => Box::new(FifoQueue::new()),
    };
    for entry in entries {
        queue.push(entry);
    }
    queue
}

/// Heap ordered by `rule`, with `tie_break` folded in as a secondary key.
fn heap_for<R>(rule: R, tie_break: TieBreak) -> PriorityQueue<ReadyEntry>
where
    R: DispatchingRule + 'static,
{
    let orientation = rule.orientation();
    let compare = move |a: &ReadyEntry, b: &ReadyEntry| -> Ordering {
        let primary = rule.compare(a, b);
        match tie_break {
            TieBreak::HeapOrder => primary,
            // Max heaps invert the whole comparison, so the id key is
            // pre-inverted to still put the earlier id first.
            TieBreak::ArrivalOrder => primary.then_with(|| match orientation {
                HeapOrientation::Min => a.id.cmp(&b.id),
                HeapOrientation::Max => b.id.cmp(&a.id),
            }),
        }
    };
    match orientation {
        HeapOrientation::Min => PriorityQueue::min(compare),
        HeapOrientation::Max => PriorityQueue::max(compare),
    }
}
