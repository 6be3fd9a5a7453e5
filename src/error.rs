//! Error type for engine operations.
//!
//! Every rejected operation leaves the engine untouched: parameters are
//! checked before any registry or queue mutation. An empty ready queue is
//! not an error; it surfaces as `None` and the CPU idles for that tick.

use std::fmt;

use crate::models::{TaskId, TaskStatus};
use crate::validation::ValidationError;

/// Errors returned by [`SchedulingEngine`](crate::SchedulingEngine) operations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SchedulerError {
    /// Submission parameters outside the configured domain.
    InvalidTaskParameters(Vec<ValidationError>),
    /// Removal requested for a task that is not waiting.
    TaskNotRemovable { id: TaskId, status: TaskStatus },
    /// No task with this id in the registry.
    UnknownTask(TaskId),
    /// Policy switch requested while the driver is playing.
    PolicyChangeDuringTick,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTaskParameters(errors) => {
                write!(f, "invalid task parameters: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
            Self::TaskNotRemovable { id, status } => {
                write!(f, "task {id} is {status} and cannot be removed")
            }
            Self::UnknownTask(id) => write!(f, "unknown task {id}"),
            Self::PolicyChangeDuringTick => {
                write!(f, "scheduling policy cannot change while the simulation is playing")
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidTaskParameters(errors)
    }
}
