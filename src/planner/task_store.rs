use super::events::StoreEvent;
use super::task::{NewTask, Task, epoch_millis, local_now};
use crate::error::{PlannerError, Result};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Number of unread change notifications kept per subscriber
const EVENT_CAPACITY: usize = 64;

/// Owner of the task collection
///
/// All mutation goes through `add_task`, `toggle_complete` and `delete_task`;
/// each successful mutation is announced to subscribers as a [`StoreEvent`].
#[derive(Debug)]
pub struct TaskStore {
    /// Tasks in insertion order
    ///
    /// Insertion order is the tie-breaker when views are sorted by due date,
    /// so tasks are only ever appended or removed, never reordered.
    pub(crate) tasks: Vec<Task>,

    /// Largest id ever issued by this store (never decreases, even on delete)
    pub(crate) last_id: i64,

    events: broadcast::Sender<StoreEvent>,
}

impl Default for TaskStore {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            tasks: Vec::new(),
            last_id: 0,
            events,
        }
    }
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a store from a previously saved collection
    ///
    /// Tasks whose id was already seen are dropped so the id invariant holds
    /// even for a hand-edited file.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::new();
        let mut seen = HashSet::new();
        for task in tasks {
            if !seen.insert(task.id) {
                warn!(task_id = task.id, "Dropping task with duplicate id");
                continue;
            }
            store.last_id = store.last_id.max(task.id);
            store.tasks.push(task);
        }
        debug!(count = store.tasks.len(), "Restored task store");
        store
    }

    /// Consume the store, returning tasks in insertion order
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }

    /// Generate a new unique task ID derived from the creation timestamp
    ///
    /// Falls back to `last_id + 1` when the clock has not advanced past the
    /// last issued id.
    ///
    /// # Errors
    /// Returns [`PlannerError::IdsExhausted`] once `i64::MAX` has been issued.
    fn generate_task_id(&mut self, now: NaiveDateTime) -> Result<i64> {
        let candidate = epoch_millis(now);
        let id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id
                .checked_add(1)
                .ok_or(PlannerError::IdsExhausted(self.last_id))?
        };
        self.last_id = id;
        Ok(id)
    }

    /// Add a task created now
    ///
    /// # Errors
    /// Returns [`PlannerError::Validation`] when `title`, `subject`,
    /// `priority` or `due_date` is missing, or [`PlannerError::IdsExhausted`]
    /// when no fresh id is left. The collection is left untouched.
    pub fn add_task(&mut self, new_task: NewTask) -> Result<Task> {
        self.add_task_at(new_task, local_now())
    }

    /// Add a task with an explicit creation time
    pub fn add_task_at(&mut self, new_task: NewTask, now: NaiveDateTime) -> Result<Task> {
        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(PlannerError::missing("title"));
        }
        let subject = new_task.subject.trim();
        if subject.is_empty() {
            return Err(PlannerError::missing("subject"));
        }
        let priority = new_task
            .priority
            .ok_or_else(|| PlannerError::missing("priority"))?;
        let due_date = new_task
            .due_date
            .ok_or_else(|| PlannerError::missing("due date"))?;

        let task = Task {
            id: self.generate_task_id(now)?,
            title: title.to_string(),
            subject: subject.to_string(),
            priority,
            due_date,
            due_time: new_task.due_time,
            notes: new_task.notes.filter(|n| !n.trim().is_empty()),
            completed: false,
            created_at: now,
        };

        self.tasks.push(task.clone());
        info!(task_id = task.id, subject = %task.subject, "Task added");
        self.emit(StoreEvent::Added { id: task.id });
        Ok(task)
    }

    /// Flip the completion flag of a task
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`] if no task has the given id.
    pub fn toggle_complete(&mut self, id: i64) -> Result<Task> {
        let task = self.get_mut(id).ok_or(PlannerError::NotFound(id))?;
        task.completed = !task.completed;
        let task = task.clone();

        info!(task_id = id, completed = task.completed, "Task toggled");
        self.emit(StoreEvent::Toggled {
            id,
            completed: task.completed,
        });
        Ok(task)
    }

    /// Remove a task from the collection
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`] if no task has the given id.
    pub fn delete_task(&mut self, id: i64) -> Result<()> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(PlannerError::NotFound(id))?;
        self.tasks.remove(pos);

        info!(task_id = id, "Task deleted");
        self.emit(StoreEvent::Deleted { id });
        Ok(())
    }
}
