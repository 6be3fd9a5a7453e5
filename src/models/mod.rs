//! Simulation domain models.
//!
//! # Domain Mappings
//!
//! | cpu-sched-sim | Operating system | Textbook |
//! |---------------|------------------|----------|
//! | Task | Process / thread | Job |
//! | SchedulingPolicy | Scheduler class | Dispatching rule |
//! | Tick | Timer interrupt | Time unit |

mod policy;
mod task;

pub use policy::SchedulingPolicy;
pub use task::{Task, TaskId, TaskStatus, Tick};
