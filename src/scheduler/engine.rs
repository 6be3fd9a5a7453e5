//! Tick-driven scheduling engine.
//!
//! # Algorithm (one tick)
//!
//! 1. Advance the clock by one unit.
//! 2. If a task is running, take one unit off its remaining time. At zero it
//!    completes: `end_time` = new clock, moved to the completed set, CPU freed.
//! 3. If the CPU is free (including freed in step 2), pop the next entry of
//!    the active policy's container, mark it running and record `start_time`
//!    on its first dispatch.
//! 4. Admit waiting tasks whose arrival time equals the new clock into the
//!    container; they become eligible from the next tick on.
//!
//! An empty container leaves the CPU idle for the tick.
//!
//! # Arrivals
//! The container holds exactly the waiting tasks with
//! `arrival_time <= current_time`. Live submissions arrive at the current
//! time and are pushed immediately. After a [`SchedulingEngine::reset`] the
//! clock restarts at 0 while arrival times stay fixed, so later arrivals are
//! held back until the clock reaches them and replay the same waiting times.
//!
//! # Pacing
//! The engine has no timer. A wall-clock driver calls [`SchedulingEngine::step`]
//! periodically; tests call it directly; [`SchedulingEngine::run_until_idle`]
//! fast-forwards. `start`/`pause` only record the driver's state, which
//! gates policy switches.
//!
//! # Concurrency
//! Single-threaded. Embedders sharing an engine across threads wrap it in
//! one lock and hold it for each operation.

use log::{debug, info, trace, warn};

use super::{SimulationMetrics, SimulationSnapshot, TaskMetrics, TaskRegistry};
use crate::config::SchedulerConfig;
use crate::dispatching::{build_ready_queue, ReadyEntry};
use crate::error::SchedulerError;
use crate::models::{SchedulingPolicy, Task, TaskId, TaskStatus, Tick};
use crate::queues::ReadyQueue;
use crate::validation;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Clock value after the tick.
    pub time: Tick,
    /// Task that finished this tick.
    pub completed: Option<TaskId>,
    /// Task dispatched this tick.
    pub dispatched: Option<TaskId>,
    /// Task on the CPU at the end of the tick.
    pub running: Option<TaskId>,
}

impl StepOutcome {
    /// Whether the CPU ended the tick without a task.
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }
}

/// Single-CPU scheduling simulator.
///
/// Owns the task registry and the ready container of the active policy.
/// The container holds [`ReadyEntry`] handles; task state lives only in
/// the registry.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::{SchedulingEngine, SchedulerConfig, SchedulingPolicy, TaskStatus};
///
/// let config = SchedulerConfig::default().with_initial_policy(SchedulingPolicy::Fcfs);
/// let mut engine = SchedulingEngine::new(config);
/// let a = engine.submit_task("A", 2, 1).unwrap();
/// let b = engine.submit_task("B", 1, 9).unwrap();
///
/// engine.step();
/// assert_eq!(engine.task(a).unwrap().status, TaskStatus::Running);
/// assert_eq!(engine.task(b).unwrap().status, TaskStatus::Waiting);
/// ```
#[derive(Debug)]
pub struct SchedulingEngine {
    config: SchedulerConfig,
    registry: TaskRegistry,
    policy: SchedulingPolicy,
    ready: Box<dyn ReadyQueue<ReadyEntry>>,
    current_time: Tick,
    running: Option<TaskId>,
    completed: Vec<TaskId>,
    playing: bool,
}

impl SchedulingEngine {
    /// Creates an engine with no tasks at time 0.
    pub fn new(config: SchedulerConfig) -> Self {
        let policy = config.initial_policy;
        let ready = build_ready_queue(policy, config.tie_break, Vec::new());
        Self {
            config,
            registry: TaskRegistry::new(),
            policy,
            ready,
            current_time: 0,
            running: None,
            completed: Vec::new(),
            playing: false,
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    // ======================== Submission & removal ========================

    /// Submits a task arriving at the current time.
    ///
    /// Parameters are validated before anything is stored.
    pub fn submit_task(
        &mut self,
        name: impl Into<String>,
        execution_time: Tick,
        priority: u32,
    ) -> Result<TaskId, SchedulerError> {
        let name = name.into();
        if let Err(errors) =
            validation::validate_submission(&name, execution_time, priority, &self.config)
        {
            warn!("rejected task '{name}': {} problem(s)", errors.len());
            return Err(SchedulerError::InvalidTaskParameters(errors));
        }

        let arrival = self.current_time;
        let id = self
            .registry
            .insert_with(|id| Task::new(id, name, execution_time, priority, arrival));
        if let Some(task) = self.registry.get(id) {
            self.ready.push(ReadyEntry::from(task));
        }

        debug!("submitted {id} (exec {execution_time}, priority {priority}) at {arrival}");
        Ok(id)
    }

    /// Removes a waiting task and rebuilds the ready container.
    ///
    /// Running and completed tasks are rejected with
    /// [`SchedulerError::TaskNotRemovable`]; nothing changes.
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task, SchedulerError> {
        let status = match self.registry.get(id) {
            Some(task) => task.status,
            None => {
                warn!("remove of unknown task {id}");
                return Err(SchedulerError::UnknownTask(id));
            }
        };
        if status != TaskStatus::Waiting {
            warn!("remove of {id} rejected: task is {status}");
            return Err(SchedulerError::TaskNotRemovable { id, status });
        }

        let removed = self
            .registry
            .remove(id)
            .ok_or(SchedulerError::UnknownTask(id))?;
        self.rebuild_ready_queue();

        debug!("removed {id}");
        Ok(removed)
    }

    // ======================== Policy & driver ========================

    /// Active policy.
    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    /// Switches the active policy and rebuilds its container from the ready set.
    ///
    /// Rejected while the driver is playing.
    pub fn set_policy(&mut self, policy: SchedulingPolicy) -> Result<(), SchedulerError> {
        if self.playing {
            warn!("policy change to {policy} rejected while playing");
            return Err(SchedulerError::PolicyChangeDuringTick);
        }
        self.policy = policy;
        self.rebuild_ready_queue();
        info!("policy set to {policy} ({} ready)", self.ready.len());
        Ok(())
    }

    /// Records that an external driver started issuing ticks.
    pub fn start(&mut self) {
        self.playing = true;
    }

    /// Records that the external driver stopped.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Whether the external driver is playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    // ======================== Simulation ========================

    /// Advances the simulation by one time unit.
    pub fn step(&mut self) -> StepOutcome {
        self.current_time += 1;
        let now = self.current_time;

        let mut completed = None;
        if let Some(id) = self.running {
            match self.registry.get_mut(id) {
                Some(task) => {
                    if task.run_one_tick(now) {
                        debug!("{id} completed at {now}");
                        self.completed.push(id);
                        self.running = None;
                        completed = Some(id);
                    }
                }
                None => self.running = None,
            }
        }

        let mut dispatched = None;
        if self.running.is_none() {
            while let Some(entry) = self.ready.pop() {
                if let Some(task) = self.registry.get_mut(entry.id) {
                    task.dispatch(now);
                    debug!("{} dispatched at {now} by {}", entry.id, self.policy);
                    self.running = Some(entry.id);
                    dispatched = Some(entry.id);
                    break;
                }
            }
        }

        for entry in self.registry.arrivals_at(now) {
            trace!("{} admitted at {now}", entry.id);
            self.ready.push(entry);
        }

        trace!(
            "tick {now}: running {:?}, {} ready",
            self.running,
            self.ready.len()
        );
        debug_assert!(validation::check_snapshot(&self.snapshot()).is_ok());

        StepOutcome {
            time: now,
            completed,
            dispatched,
            running: self.running,
        }
    }

    /// Runs `ticks` steps, returning each outcome.
    pub fn run_ticks(&mut self, ticks: Tick) -> Vec<StepOutcome> {
        (0..ticks).map(|_| self.step()).collect()
    }

    /// Steps until nothing is running or waiting, at most `max_ticks` times.
    ///
    /// Returns the number of ticks taken.
    pub fn run_until_idle(&mut self, max_ticks: Tick) -> Tick {
        let mut taken = 0;
        while taken < max_ticks && !self.is_idle() {
            self.step();
            taken += 1;
        }
        taken
    }

    /// Whether nothing is running and nothing is waiting, including tasks
    /// that have not arrived yet.
    pub fn is_idle(&self) -> bool {
        self.running.is_none() && !self.registry.has_waiting()
    }

    /// Returns to time 0 with every task waiting again.
    ///
    /// Task definitions and arrival times are kept; runtime fields are
    /// restored and the driver is paused. Tasks that arrived after time 0
    /// re-enter the container when the clock reaches their arrival time.
    pub fn reset(&mut self) {
        self.playing = false;
        self.current_time = 0;
        self.running = None;
        self.completed.clear();
        self.registry.reset_all();
        self.rebuild_ready_queue();
        info!(
            "reset: {} task(s) waiting, {} ready",
            self.registry.iter().filter(|t| t.is_waiting()).count(),
            self.ready.len()
        );
    }

    fn rebuild_ready_queue(&mut self) {
        self.ready = build_ready_queue(
            self.policy,
            self.config.tie_break,
            self.registry.ready_entries(self.current_time),
        );
    }

    // ======================== Queries ========================

    /// Current simulated time.
    pub fn current_time(&self) -> Tick {
        self.current_time
    }

    /// Looks up a task.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.registry.get(id)
    }

    /// All tasks, in submission order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.registry.iter()
    }

    /// Task on the CPU.
    pub fn running_task(&self) -> Option<&Task> {
        self.running.and_then(|id| self.registry.get(id))
    }

    /// Completed tasks, in completion order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.completed.iter().filter_map(|&id| self.registry.get(id))
    }

    /// Number of arrived waiting tasks in the container.
    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    /// Next task the active policy would dispatch.
    pub fn peek_next(&self) -> Option<&Task> {
        self.ready.peek().and_then(|entry| self.registry.get(entry.id))
    }

    /// Container `policy` would hold for the current ready set, in storage order.
    ///
    /// Built on demand; the engine only maintains the active policy's container.
    pub fn ready_queue_view(&self, policy: SchedulingPolicy) -> Vec<ReadyEntry> {
        if policy == self.policy {
            return self.ready.to_vec();
        }
        build_ready_queue(
            policy,
            self.config.tie_break,
            self.registry.ready_entries(self.current_time),
        )
        .to_vec()
    }

    /// Read-only copy of the whole simulation state.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            current_time: self.current_time,
            policy: self.policy,
            is_playing: self.playing,
            tasks: self.registry.iter().cloned().collect(),
            completed: self.completed_tasks().cloned().collect(),
            running: self.running_task().cloned(),
            ready_queue: self.ready.to_vec().into_iter().map(|e| e.id).collect(),
        }
    }

    /// Aggregate metrics at the current time.
    pub fn metrics(&self) -> SimulationMetrics {
        let completed: Vec<Task> = self.completed_tasks().cloned().collect();
        SimulationMetrics::calculate(&completed, self.running_task(), self.current_time)
    }

    /// Statistics row per task, in submission order.
    pub fn task_metrics(&self) -> Vec<TaskMetrics> {
        self.registry.iter().map(TaskMetrics::from_task).collect()
    }
}

impl Default for SchedulingEngine {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}
