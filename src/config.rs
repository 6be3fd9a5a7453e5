//! Engine configuration.
//!
//! Accepted submission ranges and the engine's starting policy. The
//! defaults mirror a classroom simulator: execution time 1..=20 units,
//! priority 1..=10.
//!
//! Loading from files or the environment is left to the embedding layer;
//! the struct derives serde traits so any format works.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::dispatching::TieBreak;
use crate::models::{SchedulingPolicy, Tick};

/// Default smallest accepted execution time.
pub const DEFAULT_MIN_EXECUTION_TIME: Tick = 1;
/// Default largest accepted execution time.
pub const DEFAULT_MAX_EXECUTION_TIME: Tick = 20;
/// Default lowest accepted priority.
pub const DEFAULT_MIN_PRIORITY: u32 = 1;
/// Default highest accepted priority.
pub const DEFAULT_MAX_PRIORITY: u32 = 10;

/// Scheduler configuration.
///
/// # Example
/// ```
/// use cpu_sched_sim::{SchedulerConfig, SchedulingPolicy};
///
/// let config = SchedulerConfig::default()
///     .with_priority_range(1, 5)
///     .with_initial_policy(SchedulingPolicy::Fcfs);
/// assert!(config.priority_range().contains(&5));
/// assert!(!config.priority_range().contains(&6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Smallest accepted execution time (never below 1).
    pub min_execution_time: Tick,
    /// Largest accepted execution time.
    pub max_execution_time: Tick,
    /// Lowest accepted priority.
    pub min_priority: u32,
    /// Highest accepted priority.
    pub max_priority: u32,
    /// Policy active after construction.
    pub initial_policy: SchedulingPolicy,
    /// Heap tie resolution.
    pub tie_break: TieBreak,
    /// Reject blank task names.
    pub require_name: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_execution_time: DEFAULT_MIN_EXECUTION_TIME,
            max_execution_time: DEFAULT_MAX_EXECUTION_TIME,
            min_priority: DEFAULT_MIN_PRIORITY,
            max_priority: DEFAULT_MAX_PRIORITY,
            initial_policy: SchedulingPolicy::default(),
            tie_break: TieBreak::default(),
            require_name: true,
        }
    }
}

impl SchedulerConfig {
    /// Sets the accepted execution-time range. A minimum of 0 is raised to 1.
    pub fn with_execution_time_range(mut self, min: Tick, max: Tick) -> Self {
        self.min_execution_time = min.max(1);
        self.max_execution_time = max;
        self
    }

    /// Sets the accepted priority range. A minimum of 0 is raised to 1.
    pub fn with_priority_range(mut self, min: u32, max: u32) -> Self {
        self.min_priority = min.max(1);
        self.max_priority = max;
        self
    }

    /// Sets the policy active after construction.
    pub fn with_initial_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.initial_policy = policy;
        self
    }

    /// Sets the heap tie resolution.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets whether blank names are rejected.
    pub fn with_require_name(mut self, require_name: bool) -> Self {
        self.require_name = require_name;
        self
    }

    /// Accepted execution times.
    ///
    /// Never admits 0, even if the field was deserialized as 0.
    pub fn execution_time_range(&self) -> RangeInclusive<Tick> {
        self.min_execution_time.max(1)..=self.max_execution_time
    }

    /// Accepted priorities.
    ///
    /// Never admits 0, even if the field was deserialized as 0.
    pub fn priority_range(&self) -> RangeInclusive<u32> {
        self.min_priority.max(1)..=self.max_priority
    }
}
