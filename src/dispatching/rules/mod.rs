//! Built-in dispatching rules.
//!
//! | Rule | Key | Orientation |
//! |------|-----|-------------|
//! | [`ShortestJob`] | execution time | min |
//! | [`HighestPriority`] | priority | max |
//!
//! FCFS has no rule: its queue never compares entries.

use std::cmp::Ordering;

use super::{DispatchingRule, ReadyEntry};
use crate::queues::HeapOrientation;

/// Shortest Job First.
///
/// Dispatches the entry with the smallest total execution time.
/// Minimizes average waiting time on a single processor when all jobs are
/// available together.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl DispatchingRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn orientation(&self) -> HeapOrientation {
        HeapOrientation::Min
    }

    fn compare(&self, a: &ReadyEntry, b: &ReadyEntry) -> Ordering {
        a.execution_time.cmp(&b.execution_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority, highest value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn orientation(&self) -> HeapOrientation {
        HeapOrientation::Max
    }

    fn compare(&self, a: &ReadyEntry, b: &ReadyEntry) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}
