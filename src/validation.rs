//! Input validation and lifecycle integrity checks.
//!
//! Two families of checks:
//! - **Submission**: task parameters against the configured ranges, run
//!   before anything is written to the registry.
//! - **Integrity**: a snapshot against the lifecycle invariants:
//!   - At most one running task, and it is the one in the running slot
//!   - `remaining_time` within `[0, execution_time]`
//!   - `arrival_time ≤ start_time ≤ end_time` where set
//!   - Status consistent with the set time fields
//!   - Ready queue holds exactly the waiting tasks that have arrived
//!
//! Every check runs; all problems are reported together.

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::models::{Task, TaskStatus, Tick};
use crate::scheduler::SimulationSnapshot;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Task name is blank.
    EmptyName,
    /// Execution time outside the accepted range.
    ExecutionTimeOutOfRange,
    /// Priority outside the accepted range.
    PriorityOutOfRange,
    /// More than one task is running, or the running slot disagrees.
    MultipleRunning,
    /// Remaining time exceeds execution time.
    RemainingOutOfRange,
    /// Arrival/start/end times out of order.
    TimeOrdering,
    /// Status contradicts the time fields.
    StatusMismatch,
    /// Ready queue does not hold exactly the arrived waiting tasks.
    ReadySetMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates submission parameters.
///
/// Checks:
/// 1. Name is not blank (when `config.require_name`)
/// 2. Execution time within `config.execution_time_range()`
/// 3. Priority within `config.priority_range()`
pub fn validate_submission(
    name: &str,
    execution_time: Tick,
    priority: u32,
    config: &SchedulerConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if config.require_name && name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            "Task name must not be blank",
        ));
    }

    let exec_range = config.execution_time_range();
    if !exec_range.contains(&execution_time) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ExecutionTimeOutOfRange,
            format!(
                "Execution time {execution_time} outside {}..={}",
                exec_range.start(),
                exec_range.end()
            ),
        ));
    }

    let priority_range = config.priority_range();
    if !priority_range.contains(&priority) {
        errors.push(ValidationError::new(
            ValidationErrorKind::PriorityOutOfRange,
            format!(
                "Priority {priority} outside {}..={}",
                priority_range.start(),
                priority_range.end()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a snapshot against the lifecycle invariants.
pub fn check_snapshot(snapshot: &SimulationSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let running: Vec<&Task> = snapshot.tasks.iter().filter(|t| t.is_running()).collect();
    let slot = snapshot.running.as_ref().map(|t| t.id);
    let slot_matches = match (running.as_slice(), slot) {
        ([], None) => true,
        ([only], Some(id)) => only.id == id,
        _ => false,
    };
    if !slot_matches {
        errors.push(ValidationError::new(
            ValidationErrorKind::MultipleRunning,
            format!(
                "{} running task(s), running slot holds {:?}",
                running.len(),
                slot
            ),
        ));
    }

    for task in &snapshot.tasks {
        check_task(task, snapshot.current_time, &mut errors);
    }

    let waiting: HashSet<_> = snapshot
        .tasks
        .iter()
        .filter(|t| t.is_waiting() && t.arrival_time <= snapshot.current_time)
        .map(|t| t.id)
        .collect();
    let queued: HashSet<_> = snapshot.ready_queue.iter().copied().collect();
    if waiting != queued || queued.len() != snapshot.ready_queue.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ReadySetMismatch,
            format!(
                "{} arrived waiting task(s) but {} ready queue entries",
                waiting.len(),
                snapshot.ready_queue.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_task(task: &Task, now: Tick, errors: &mut Vec<ValidationError>) {
    if task.remaining_time > task.execution_time {
        errors.push(ValidationError::new(
            ValidationErrorKind::RemainingOutOfRange,
            format!(
                "Task {} has {} remaining of {}",
                task.id, task.remaining_time, task.execution_time
            ),
        ));
    }

    let ordered = match (task.start_time, task.end_time) {
        (None, None) => true,
        (Some(start), None) => task.arrival_time <= start && start <= now,
        (Some(start), Some(end)) => task.arrival_time <= start && start <= end && end <= now,
        (None, Some(_)) => false,
    };
    if !ordered {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOrdering,
            format!(
                "Task {} times out of order: arrival {}, start {:?}, end {:?}",
                task.id, task.arrival_time, task.start_time, task.end_time
            ),
        ));
    }

    let consistent = match task.status {
        TaskStatus::Waiting => {
            task.start_time.is_none()
                && task.end_time.is_none()
                && task.remaining_time == task.execution_time
        }
        TaskStatus::Running => {
            task.start_time.is_some() && task.end_time.is_none() && task.remaining_time > 0
        }
        TaskStatus::Completed => task.end_time.is_some() && task.remaining_time == 0,
    };
    if !consistent {
        errors.push(ValidationError::new(
            ValidationErrorKind::StatusMismatch,
            format!("Task {} is {} with inconsistent fields", task.id, task.status),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SchedulingPolicy, TaskId};

    fn config() -> SchedulerConfig {
        SchedulerConfig::default()
    }

    fn snapshot(tasks: Vec<Task>, current_time: Tick) -> SimulationSnapshot {
        let running = tasks.iter().find(|t| t.is_running()).cloned();
        let completed = tasks.iter().filter(|t| t.is_completed()).cloned().collect();
        let ready_queue = tasks
            .iter()
            .filter(|t| t.is_waiting() && t.arrival_time <= current_time)
            .map(|t| t.id)
            .collect();
        SimulationSnapshot {
            current_time,
            policy: SchedulingPolicy::Fcfs,
            is_playing: false,
            tasks,
            completed,
            running,
            ready_queue,
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(validate_submission("A", 5, 3, &config()).is_ok());
        assert!(validate_submission("A", 1, 1, &config()).is_ok());
        assert!(validate_submission("A", 20, 10, &config()).is_ok());
    }

    #[test]
    fn test_zero_execution_time() {
        let errs = validate_submission("A", 0, 3, &config()).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ValidationErrorKind::ExecutionTimeOutOfRange);
    }

    #[test]
    fn test_priority_out_of_range() {
        let errs = validate_submission("A", 3, 0, &config()).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::PriorityOutOfRange);
        let errs = validate_submission("A", 3, 11, &config()).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::PriorityOutOfRange);
    }

    #[test]
    fn test_blank_name() {
        let errs = validate_submission("   ", 3, 3, &config()).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::EmptyName);

        let lenient = config().with_require_name(false);
        assert!(validate_submission("", 3, 3, &lenient).is_ok());
    }

    #[test]
    fn test_reports_all_problems() {
        let errs = validate_submission("", 0, 99, &config()).unwrap_err();
        let kinds: Vec<_> = errs.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::EmptyName,
                ValidationErrorKind::ExecutionTimeOutOfRange,
                ValidationErrorKind::PriorityOutOfRange,
            ]
        );
    }

    #[test]
    fn test_consistent_snapshot() {
        let waiting = Task::new(TaskId(0), "A", 3, 1, 0);
        let mut running = Task::new(TaskId(1), "B", 2, 1, 0);
        running.dispatch(1);
        let mut done = Task::new(TaskId(2), "C", 1, 1, 0);
        done.dispatch(1);
        done.run_one_tick(2);
        // Only one of B and C can have held the CPU at tick 1; shift B.
        running.start_time = Some(2);

        assert!(check_snapshot(&snapshot(vec![waiting, running, done], 2)).is_ok());
    }

    #[test]
    fn test_two_running() {
        let mut a = Task::new(TaskId(0), "A", 3, 1, 0);
        let mut b = Task::new(TaskId(1), "B", 3, 1, 0);
        a.dispatch(1);
        b.dispatch(1);
        let errs = check_snapshot(&snapshot(vec![a, b], 1)).unwrap_err();
        assert!(errs
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MultipleRunning));
    }

    #[test]
    fn test_start_before_arrival() {
        let mut a = Task::new(TaskId(0), "A", 3, 1, 5);
        a.dispatch(2);
        let errs = check_snapshot(&snapshot(vec![a], 6)).unwrap_err();
        assert!(errs.iter().any(|e| e.kind == ValidationErrorKind::TimeOrdering));
    }

    #[test]
    fn test_status_mismatch() {
        let mut a = Task::new(TaskId(0), "A", 3, 1, 0);
        a.remaining_time = 1;
        let errs = check_snapshot(&snapshot(vec![a], 0)).unwrap_err();
        assert!(errs
            .iter()
            .any(|e| e.kind == ValidationErrorKind::StatusMismatch));
    }

    #[test]
    fn test_ready_set_mismatch() {
        let a = Task::new(TaskId(0), "A", 3, 1, 0);
        let mut snap = snapshot(vec![a], 0);
        snap.ready_queue.clear();
        let errs = check_snapshot(&snap).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::ReadySetMismatch);
    }

    #[test]
    fn test_future_arrival_stays_out_of_ready_queue() {
        let late = Task::new(TaskId(0), "late", 2, 1, 5);
        let snap = snapshot(vec![late], 3);
        assert!(snap.ready_queue.is_empty());
        assert!(check_snapshot(&snap).is_ok());

        let mut queued_early = snap.clone();
        queued_early.ready_queue.push(TaskId(0));
        let errs = check_snapshot(&queued_early).unwrap_err();
        assert_eq!(errs[0].kind, ValidationErrorKind::ReadySetMismatch);
    }
}
