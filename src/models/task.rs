//! Task (process) model.
//!
//! A task is a unit of CPU work submitted to the simulator. Its identity,
//! execution time, priority and arrival time are fixed at submission;
//! start/end times, remaining time and status are runtime fields owned by
//! the scheduling engine.
//!
//! # Lifecycle
//!
//! ```text
//! Waiting ──dispatch──▶ Running ──remaining = 0──▶ Completed
//!                        │  ▲
//!                        └──┘ decrement
//! ```
//!
//! Only a full engine reset moves a task back to `Waiting`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated time, in whole time units.
pub type Tick = u64;

/// Stable task handle.
///
/// Assigned in submission order and never reused, so it doubles as the
/// arrival-order key for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Slot index in the task arena, or `None` if the id does not fit in `usize`.
    #[inline]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// In the ready set, eligible for dispatch.
    Waiting,
    /// Occupying the CPU.
    Running,
    /// Finished; terminal until reset.
    Completed,
}

impl TaskStatus {
    /// Whether `self → next` is a legal lifecycle transition.
    ///
    /// `Running → Running` is the decrement self-loop.
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Waiting, TaskStatus::Running)
                | (TaskStatus::Running, TaskStatus::Running)
                | (TaskStatus::Running, TaskStatus::Completed)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Waiting => "waiting",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A task tracked by the simulator.
///
/// # Time Representation
/// All times are simulated ticks since the last reset. `None` in
/// `start_time`/`end_time` means "not yet assigned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Display label.
    pub name: String,
    /// Total CPU time required (≥ 1).
    pub execution_time: Tick,
    /// Static priority (higher = more urgent).
    pub priority: u32,
    /// Simulated time at submission.
    pub arrival_time: Tick,
    /// Time of first dispatch.
    pub start_time: Option<Tick>,
    /// Time of completion.
    pub end_time: Option<Tick>,
    /// CPU time still owed; starts at `execution_time`.
    pub remaining_time: Tick,
    /// Current lifecycle state.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a waiting task with unset start/end times.
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        execution_time: Tick,
        priority: u32,
        arrival_time: Tick,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            execution_time,
            priority,
            arrival_time,
            start_time: None,
            end_time: None,
            remaining_time: execution_time,
            status: TaskStatus::Waiting,
        }
    }

    /// Whether the task is in the ready set.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == TaskStatus::Waiting
    }

    /// Whether the task is on the CPU.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == TaskStatus::Running
    }

    /// Whether the task has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// CPU time consumed so far.
    #[inline]
    pub fn executed_time(&self) -> Tick {
        self.execution_time - self.remaining_time
    }

    /// Marks the task as running at `now`.
    ///
    /// `start_time` is recorded only on the first dispatch.
    pub(crate) fn dispatch(&mut self, now: Tick) {
        debug_assert!(self.status.can_transition_to(TaskStatus::Running));
        self.status = TaskStatus::Running;
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Consumes one unit of CPU time at `now`.
    ///
    /// Returns `true` when this unit completed the task.
    pub(crate) fn run_one_tick(&mut self, now: Tick) -> bool {
        debug_assert!(self.is_running());
        self.remaining_time = self.remaining_time.saturating_sub(1);
        if self.remaining_time == 0 {
            self.status = TaskStatus::Completed;
            self.end_time = Some(now);
            true
        } else {
            false
        }
    }

    /// Restores runtime fields to their submission values.
    pub(crate) fn reset_runtime(&mut self) {
        self.start_time = None;
        self.end_time = None;
        self.remaining_time = self.execution_time;
        self.status = TaskStatus::Waiting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_waiting() {
        let task = Task::new(TaskId(0), "A", 5, 3, 2);
        assert_eq!(task.status, TaskStatus::Waiting);
        assert_eq!(task.start_time, None);
        assert_eq!(task.end_time, None);
        assert_eq!(task.remaining_time, 5);
        assert_eq!(task.arrival_time, 2);
        assert_eq!(task.executed_time(), 0);
    }

    #[test]
    fn test_dispatch_sets_start_once() {
        let mut task = Task::new(TaskId(0), "A", 2, 1, 0);
        task.dispatch(3);
        assert!(task.is_running());
        assert_eq!(task.start_time, Some(3));

        // A second dispatch must not move the first-dispatch time.
        task.status = TaskStatus::Waiting;
        task.dispatch(7);
        assert_eq!(task.start_time, Some(3));
    }

    #[test]
    fn test_run_until_completion() {
        let mut task = Task::new(TaskId(1), "B", 2, 1, 0);
        task.dispatch(1);
        assert!(!task.run_one_tick(2));
        assert_eq!(task.remaining_time, 1);
        assert_eq!(task.executed_time(), 1);
        assert!(task.run_one_tick(3));
        assert!(task.is_completed());
        assert_eq!(task.end_time, Some(3));
        assert_eq!(task.remaining_time, 0);
    }

    #[test]
    fn test_reset_runtime() {
        let mut task = Task::new(TaskId(1), "B", 1, 1, 0);
        task.dispatch(1);
        task.run_one_tick(2);
        task.reset_runtime();
        assert_eq!(task, Task::new(TaskId(1), "B", 1, 1, 0));
    }

    #[test]
    fn test_transitions() {
        use TaskStatus::*;
        assert!(Waiting.can_transition_to(Running));
        assert!(Running.can_transition_to(Running));
        assert!(Running.can_transition_to(Completed));
        assert!(!Waiting.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Waiting));
        assert!(!Completed.can_transition_to(Running));
        assert!(!Running.can_transition_to(Waiting));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
