//! Task registry.
//!
//! Arena of tasks indexed by [`TaskId`]. Slots are never reused, so a
//! stale id can only miss, never alias another task. Iteration follows
//! submission order.

use crate::dispatching::ReadyEntry;
use crate::models::{Task, TaskId, Tick};

/// Single source of truth for task state.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    slots: Vec<Option<Task>>,
    len: usize,
}

impl TaskRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted task will receive.
    pub fn next_id(&self) -> TaskId {
        TaskId(self.slots.len() as u64)
    }

    /// Inserts the task built by `make` for the next id.
    pub fn insert_with(&mut self, make: impl FnOnce(TaskId) -> Task) -> TaskId {
        let id = self.next_id();
        let task = make(id);
        debug_assert_eq!(task.id, id);
        self.slots.push(Some(task));
        self.len += 1;
        id
    }

    /// Looks up a task.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.slots.get(id.index()?)?.as_ref()
    }

    /// Looks up a task for mutation.
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.slots.get_mut(id.index()?)?.as_mut()
    }

    /// Removes a task, returning it.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let removed = id
            .index()
            .and_then(|i| self.slots.get_mut(i))
            .and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Tasks in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Mutable tasks in submission order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    /// Ready-queue entries for waiting tasks that have arrived by `now`,
    /// ordered by arrival time, then id.
    pub fn ready_entries(&self, now: Tick) -> Vec<ReadyEntry> {
        let mut arrived: Vec<&Task> = self
            .iter()
            .filter(|t| t.is_waiting() && t.arrival_time <= now)
            .collect();
        arrived.sort_by_key(|t| (t.arrival_time, t.id));
        arrived.into_iter().map(ReadyEntry::from).collect()
    }

    /// Ready-queue entries for waiting tasks arriving exactly at `now`.
    pub fn arrivals_at(&self, now: Tick) -> impl Iterator<Item = ReadyEntry> + '_ {
        self.iter()
            .filter(move |t| t.is_waiting() && t.arrival_time == now)
            .map(ReadyEntry::from)
    }

    /// Whether any task is waiting, arrived or not.
    pub fn has_waiting(&self) -> bool {
        self.iter().any(Task::is_waiting)
    }

    /// Number of tracked tasks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no tasks are tracked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Restores every task's runtime fields.
    pub fn reset_all(&mut self) {
        for task in self.iter_mut() {
            task.reset_runtime();
        }
    }
}
