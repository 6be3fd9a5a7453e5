//! Random workload generation.
//!
//! Produces task submissions drawn uniformly from the configured ranges.
//! Pass a seeded RNG for reproducible runs. A config whose range is
//! inverted accepts nothing, so the generator produces nothing for it.
//!
//! # Example
//! ```
//! use cpu_sched_sim::workload::{submit_all, WorkloadGenerator};
//! use cpu_sched_sim::{SchedulerConfig, SchedulingEngine};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = SchedulerConfig::default();
//! let mut rng = StdRng::seed_from_u64(7);
//! let specs = WorkloadGenerator::from_config(&config).generate(&mut rng, 5);
//!
//! let mut engine = SchedulingEngine::new(config);
//! let ids = submit_all(&mut engine, &specs).unwrap();
//! assert_eq!(ids.len(), 5);
//! ```

use std::ops::RangeInclusive;

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::models::{TaskId, Tick};
use crate::scheduler::SchedulingEngine;
use crate::validation::validate_submission;

/// Parameters for one task submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Display label.
    pub name: String,
    /// Total CPU time required.
    pub execution_time: Tick,
    /// Static priority.
    pub priority: u32,
}

impl TaskSpec {
    /// Creates a spec.
    pub fn new(name: impl Into<String>, execution_time: Tick, priority: u32) -> Self {
        Self {
            name: name.into(),
            execution_time,
            priority,
        }
    }
}

/// Uniform random task generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    execution_time: RangeInclusive<Tick>,
    priority: RangeInclusive<u32>,
    name_prefix: String,
}

impl WorkloadGenerator {
    /// Generator covering the ranges `config` accepts.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            execution_time: config.execution_time_range(),
            priority: config.priority_range(),
            name_prefix: "P".to_string(),
        }
    }

    /// Sets the name prefix (names are `{prefix}{n}`, counting from 1).
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Draws `count` task specs, or none if either range is empty.
    pub fn generate<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<TaskSpec> {
        if self.execution_time.is_empty() || self.priority.is_empty() {
            warn!(
                "empty workload range (execution {:?}, priority {:?}); generating nothing",
                self.execution_time,
                self.priority
            );
            return Vec::new();
        }
        (1..=count)
            .map(|n| {
                TaskSpec::new(
                    format!("{}{n}", self.name_prefix),
                    rng.random_range(self.execution_time.clone()),
                    rng.random_range(self.priority.clone()),
                )
            })
            .collect()
    }
}

/// Submits every spec, or none if any is invalid.
pub fn submit_all(
    engine: &mut SchedulingEngine,
    specs: &[TaskSpec],
) -> Result<Vec<TaskId>, SchedulerError> {
    for spec in specs {
        validate_submission(&spec.name, spec.execution_time, spec.priority, engine.config())?;
    }
    specs
        .iter()
        .map(|spec| engine.submit_task(spec.name.clone(), spec.execution_time, spec.priority))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_ranges() {
        let config = SchedulerConfig::default()
            .with_execution_time_range(2, 6)
            .with_priority_range(3, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let specs = WorkloadGenerator::from_config(&config).generate(&mut rng, 100);

        assert_eq!(specs.len(), 100);
        assert_eq!(specs[0].name, "P1");
        assert_eq!(specs[99].name, "P100");
        for spec in &specs {
            assert!((2..=6).contains(&spec.execution_time));
            assert!((3..=4).contains(&spec.priority));
        }
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = WorkloadGenerator::from_config(&SchedulerConfig::default())
            .with_name_prefix("job");
        let a = generator.generate(&mut StdRng::seed_from_u64(9), 10);
        let b = generator.generate(&mut StdRng::seed_from_u64(9), 10);
        assert_eq!(a, b);
        assert_eq!(a[0].name, "job1");
    }

    #[test]
    fn test_inverted_range_generates_nothing() {
        let config = SchedulerConfig::default().with_priority_range(5, 3);
        let mut rng = StdRng::seed_from_u64(3);
        let specs = WorkloadGenerator::from_config(&config).generate(&mut rng, 10);
        assert!(specs.is_empty());

        let mut engine = SchedulingEngine::new(config);
        assert!(submit_all(&mut engine, &specs).unwrap().is_empty());

        let config = SchedulerConfig::default().with_execution_time_range(4, 2);
        assert!(WorkloadGenerator::from_config(&config)
            .generate(&mut rng, 10)
            .is_empty());
    }

    #[test]
    fn test_submit_all_is_all_or_nothing() {
        let mut engine = SchedulingEngine::default();
        let specs = vec![TaskSpec::new("ok", 3, 1), TaskSpec::new("bad", 0, 1)];
        let err = submit_all(&mut engine, &specs).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidTaskParameters(_)));
        assert_eq!(engine.tasks().count(), 0);
    }

    #[test]
    fn test_random_workload_runs_to_completion() {
        let config = SchedulerConfig::default();
        let specs =
            WorkloadGenerator::from_config(&config).generate(&mut StdRng::seed_from_u64(1), 12);
        let total: Tick = specs.iter().map(|s| s.execution_time).sum();

        let mut engine = SchedulingEngine::new(config);
        submit_all(&mut engine, &specs).unwrap();
        // One dispatch tick up front, then back-to-back execution.
        assert_eq!(engine.run_until_idle(10_000), total + 1);

        let metrics = engine.metrics();
        assert_eq!(metrics.completed_count, 12);
        assert_eq!(metrics.busy_time, total);
    }
}
