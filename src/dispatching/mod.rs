//! Dispatching rules and ready-queue construction.
//!
//! Each heap-backed policy has a [`DispatchingRule`] that compares two
//! ready entries. A [`TieBreak`] setting decides what happens when the rule
//! considers two entries equal, and [`build_ready_queue`] assembles the
//! container for a policy from the current ready set.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{build_ready_queue, ReadyEntry, TieBreak};
//! use cpu_sched_sim::{SchedulingPolicy, TaskId};
//!
//! let entries = vec![
//!     ReadyEntry::new(TaskId(0), 5, 1),
//!     ReadyEntry::new(TaskId(1), 2, 1),
//! ];
//! let mut queue = build_ready_queue(SchedulingPolicy::ShortestJob, TieBreak::ArrivalOrder, entries);
//! assert_eq!(queue.pop().map(|e| e.id), Some(TaskId(1)));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod queue_builder;
pub mod rules;

pub use queue_builder::{build_ready_queue, TieBreak};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::{Task, TaskId, Tick};
use crate::queues::HeapOrientation;

/// Handle stored in the ready containers.
///
/// Holds the task id plus copies of the fields the rules order by. Those
/// fields are fixed at submission, so the copies never go stale; all
/// mutable state stays in the task registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadyEntry {
    /// Task handle. Ids grow with submission order.
    pub id: TaskId,
    /// Total CPU time required.
    pub execution_time: Tick,
    /// Static priority.
    pub priority: u32,
}

impl ReadyEntry {
    /// Creates an entry.
    pub fn new(id: TaskId, execution_time: Tick, priority: u32) -> Self {
        Self {
            id,
            execution_time,
            priority,
        }
    }
}

impl From<&Task> for ReadyEntry {
    fn from(task: &Task) -> Self {
        Self::new(task.id, task.execution_time, task.priority)
    }
}

/// A heap ordering over ready entries.
///
/// `compare` is the plain value comparison; the heap's [`HeapOrientation`]
/// decides whether the low or the high end is served first. Max-oriented
/// rules are applied by inverting `compare`, not by a second comparison.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Which end of `compare`'s order is dispatched first.
    fn orientation(&self) -> HeapOrientation;

    /// Compares two entries by the rule's key only.
    fn compare(&self, a: &ReadyEntry, b: &ReadyEntry) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
