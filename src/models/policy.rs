//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule that decides dispatch order from the ready set.
///
/// | Policy | Container | Key |
/// |--------|-----------|-----|
/// | `ShortestJob` | min-heap | execution time (ascending) |
/// | `PriorityBased` | max-heap | priority (descending) |
/// | `Fcfs` | FIFO queue | submission order |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingPolicy {
    /// Shortest Job First (non-preemptive).
    #[default]
    ShortestJob,
    /// Static priority, highest first.
    PriorityBased,
    /// First Come First Served.
    Fcfs,
}

impl SchedulingPolicy {
    /// All policies, in display order.
    pub const ALL: [SchedulingPolicy; 3] = [
        SchedulingPolicy::ShortestJob,
        SchedulingPolicy::PriorityBased,
        SchedulingPolicy::Fcfs,
    ];

    /// Short name (e.g., "SJF").
    pub fn name(self) -> &'static str {
        match self {
            SchedulingPolicy::ShortestJob => "SJF",
            SchedulingPolicy::PriorityBased => "PRIORITY",
            SchedulingPolicy::Fcfs => "FCFS",
        }
    }

    /// Policy description, naming the backing container.
    pub fn description(self) -> &'static str {
        match self {
            SchedulingPolicy::ShortestJob => "Min Heap (Shortest Job First)",
            SchedulingPolicy::PriorityBased => "Max Heap (Priority Based)",
            SchedulingPolicy::Fcfs => "Queue (First Come First Served)",
        }
    }

    /// Whether the policy is backed by a binary heap.
    pub fn uses_heap(self) -> bool {
        !matches!(self, SchedulingPolicy::Fcfs)
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_shortest_job() {
        assert_eq!(SchedulingPolicy::default(), SchedulingPolicy::ShortestJob);
    }

    #[test]
    fn test_uses_heap() {
        assert!(SchedulingPolicy::ShortestJob.uses_heap());
        assert!(SchedulingPolicy::PriorityBased.uses_heap());
        assert!(!SchedulingPolicy::Fcfs.uses_heap());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SchedulingPolicy::PriorityBased).unwrap();
        assert_eq!(json, "\"priority_based\"");
        let back: SchedulingPolicy = serde_json::from_str("\"fcfs\"").unwrap();
        assert_eq!(back, SchedulingPolicy::Fcfs);
    }
}
