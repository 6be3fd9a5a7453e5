//! Read-only view of engine state for display layers.

use serde::{Deserialize, Serialize};

use crate::models::{SchedulingPolicy, Task, TaskId, Tick};

/// Point-in-time copy of the simulation state.
///
/// Consumers (Gantt charts, heap diagrams, statistics tables) read this and
/// never touch the engine directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Current simulated time.
    pub current_time: Tick,
    /// Active policy.
    pub policy: SchedulingPolicy,
    /// Whether the external driver is playing.
    pub is_playing: bool,
    /// Every tracked task, in submission order.
    pub tasks: Vec<Task>,
    /// Completed tasks, in completion order.
    pub completed: Vec<Task>,
    /// Task on the CPU, if any.
    pub running: Option<Task>,
    /// Active ready container in storage order (heap array or queue order).
    pub ready_queue: Vec<TaskId>,
}

impl SimulationSnapshot {
    /// Waiting tasks, in submission order.
    pub fn waiting(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_waiting())
    }

    /// Whether nothing is running and nothing is waiting.
    pub fn is_idle(&self) -> bool {
        self.running.is_none() && self.waiting().next().is_none()
    }

    /// Latest time any task finished, or 0.
    pub fn last_end_time(&self) -> Tick {
        self.tasks.iter().filter_map(|t| t.end_time).max().unwrap_or(0)
    }
}
