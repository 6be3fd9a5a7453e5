//! Scheduling performance metrics.
//!
//! Pure functions over tasks; nothing here mutates engine state.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting time | start − arrival (0 if not started) |
//! | Turnaround time | end − arrival (0 if not completed) |
//! | Response time | start − arrival (0 if not started) |
//! | Averages | mean over completed tasks (0 if none) |
//! | CPU utilization | 100 × busy time / current time (0 at time 0) |
//!
//! Without preemption a task is never re-queued, so waiting and response
//! time coincide.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationSnapshot;
use crate::models::{Task, TaskId, Tick};

/// Delay from arrival to first dispatch. 0 if not yet started.
pub fn waiting_time(task: &Task) -> Tick {
    task.start_time
        .map(|start| start.saturating_sub(task.arrival_time))
        .unwrap_or(0)
}

/// Delay from arrival to completion. 0 if not yet completed.
pub fn turnaround_time(task: &Task) -> Tick {
    task.end_time
        .map(|end| end.saturating_sub(task.arrival_time))
        .unwrap_or(0)
}

/// Delay from arrival to first dispatch. 0 if not yet started.
pub fn response_time(task: &Task) -> Tick {
    waiting_time(task)
}

fn average(completed: &[Task], metric: fn(&Task) -> Tick) -> f64 {
    if completed.is_empty() {
        return 0.0;
    }
    let total: Tick = completed.iter().map(metric).sum();
    total as f64 / completed.len() as f64
}

/// Per-task statistics row.
///
/// Time-derived fields are `None` until the underlying time is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMetrics {
    /// Task id.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Arrival time.
    pub arrival_time: Tick,
    /// Execution time.
    pub execution_time: Tick,
    /// Priority.
    pub priority: u32,
    /// First dispatch time.
    pub start_time: Option<Tick>,
    /// Completion time.
    pub end_time: Option<Tick>,
    /// Waiting time, once started.
    pub waiting_time: Option<Tick>,
    /// Turnaround time, once completed.
    pub turnaround_time: Option<Tick>,
    /// Response time, once started.
    pub response_time: Option<Tick>,
}

impl TaskMetrics {
    /// Builds the statistics row for a task.
    pub fn from_task(task: &Task) -> Self {
        let started = task.start_time.is_some();
        let ended = task.end_time.is_some();
        Self {
            id: task.id,
            name: task.name.clone(),
            arrival_time: task.arrival_time,
            execution_time: task.execution_time,
            priority: task.priority,
            start_time: task.start_time,
            end_time: task.end_time,
            waiting_time: started.then(|| waiting_time(task)),
            turnaround_time: ended.then(|| turnaround_time(task)),
            response_time: started.then(|| response_time(task)),
        }
    }
}

/// Aggregate simulation metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Time the metrics were taken at.
    pub current_time: Tick,
    /// Number of completed tasks.
    pub completed_count: usize,
    /// Mean waiting time over completed tasks.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed tasks.
    pub avg_turnaround_time: f64,
    /// Mean response time over completed tasks.
    pub avg_response_time: f64,
    /// CPU time spent on tasks so far.
    pub busy_time: Tick,
    /// Busy share of elapsed time, in percent (0..=100).
    pub cpu_utilization: f64,
}

impl SimulationMetrics {
    /// Computes metrics from the completed set and the running task.
    ///
    /// # Arguments
    /// * `completed` - Tasks that have finished.
    /// * `running` - Task on the CPU; its executed share counts as busy time.
    /// * `current_time` - Elapsed simulated time.
    pub fn calculate(completed: &[Task], running: Option<&Task>, current_time: Tick) -> Self {
        let completed_time: Tick = completed.iter().map(|t| t.execution_time).sum();
        let running_time = running.map(Task::executed_time).unwrap_or(0);
        let busy_time = completed_time + running_time;

        let cpu_utilization = if current_time == 0 {
            0.0
        } else {
            100.0 * busy_time as f64 / current_time as f64
        };

        Self {
            current_time,
            completed_count: completed.len(),
            avg_waiting_time: average(completed, waiting_time),
            avg_turnaround_time: average(completed, turnaround_time),
            avg_response_time: average(completed, response_time),
            busy_time,
            cpu_utilization,
        }
    }

    /// Computes metrics from a snapshot.
    pub fn from_snapshot(snapshot: &SimulationSnapshot) -> Self {
        Self::calculate(
            &snapshot.completed,
            snapshot.running.as_ref(),
            snapshot.current_time,
        )
    }

    /// Idle share of elapsed time, in percent.
    pub fn idle_percentage(&self) -> f64 {
        if self.current_time == 0 {
            0.0
        } else {
            100.0 - self.cpu_utilization
        }
    }
}
