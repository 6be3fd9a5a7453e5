//! Scheduling engine, task registry and metrics.
//!
//! `SchedulingEngine` advances a discrete clock one tick at a time,
//! dispatching from the active policy's ready container onto a single CPU.
//!
//! # Metrics
//!
//! `SimulationMetrics` computes average waiting, turnaround and response
//! time over completed tasks plus CPU utilization; `TaskMetrics` is the
//! per-task statistics row.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod engine;
pub mod metrics;
mod registry;
mod snapshot;

pub use engine::{SchedulingEngine, StepOutcome};
pub use metrics::{SimulationMetrics, TaskMetrics};
pub use registry::TaskRegistry;
pub use snapshot::SimulationSnapshot;
