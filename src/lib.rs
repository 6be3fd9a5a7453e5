//! Tick-driven CPU scheduling simulator.
//!
//! Simulates a single CPU dispatching tasks under three classical policies
//! and tracks each task's lifecycle and timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskId`, `TaskStatus`, `SchedulingPolicy`
//! - **`queues`**: Ready-set containers — binary-heap `PriorityQueue`, `FifoQueue`
//! - **`dispatching`**: Policy orderings, tie-breaking, ready-queue construction
//! - **`scheduler`**: `SchedulingEngine`, task registry, snapshots, metrics
//! - **`validation`**: Submission checks and lifecycle integrity checks
//! - **`config`**: Accepted parameter ranges and engine defaults
//! - **`workload`**: Seeded random task generation
//!
//! # Policies
//!
//! | Policy | Container | Dispatch order |
//! |--------|-----------|----------------|
//! | Shortest Job First | min-heap | ascending execution time |
//! | Priority Based | max-heap | descending priority |
//! | First Come First Served | FIFO queue | submission order |
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::{SchedulingEngine, SchedulerConfig, SchedulingPolicy};
//!
//! let mut engine = SchedulingEngine::new(SchedulerConfig::default());
//! engine.set_policy(SchedulingPolicy::ShortestJob).unwrap();
//! let a = engine.submit_task("A", 3, 1).unwrap();
//! let b = engine.submit_task("B", 1, 1).unwrap();
//!
//! engine.step();
//! assert_eq!(engine.running_task().map(|t| t.id), Some(b));
//!
//! engine.run_until_idle(100);
//! assert_eq!(engine.task(a).and_then(|t| t.end_time), Some(5));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod queues;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SchedulerConfig;
pub use error::SchedulerError;
pub use models::{SchedulingPolicy, Task, TaskId, TaskStatus, Tick};
pub use scheduler::{SchedulingEngine, SimulationMetrics, SimulationSnapshot, TaskMetrics};
