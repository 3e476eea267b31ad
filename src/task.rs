//! Task entity and the in-memory collection that owns it.

use serde::{Deserialize, Serialize};

/// A single tracked task.
///
/// Instances are only ever built by [`TaskStore::add`] from a fully
/// validated [`TaskDraft`]; nothing mutates a task after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, stable for the task's lifetime
    pub id: i64,
    pub title: String,
    /// Canonical YYYY-MM-DD date string
    pub due_date: String,
    pub category: String,
}

/// A validated task payload before the store has assigned it an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: String,
    pub category: String,
}

/// Application-owned ordered task collection.
///
/// Ids increase monotonically and are never reused within a store's
/// lifetime, so a removed id stays dead.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a task built from `draft` and return its new id.
    pub fn add(&mut self, draft: TaskDraft) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: draft.title,
            due_date: draft.due_date,
            category: draft.category,
        });
        id
    }

    /// Remove the task with the given id, keeping the rest in order.
    ///
    /// Returns `false` when no task has that id.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Read-only view of the tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
