//! Study Planner Library
//!
//! This library manages a single user's study tasks: each task has a title,
//! subject, priority, due date and optional due time and notes. Tasks can be
//! completed, reopened and deleted, listed by status, summarised as progress
//! statistics, and remind the user when their due time arrives.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Application Layer**: `StudyPlanner` - Shares the store with reminders and persists changes
//! - **Domain Layer**: `planner` module - Task model, `TaskStore`, derived views
//! - **Persistence Layer**: `storage` module - `save`/`load` hooks (no-op or TOML file)
//!
//! # Example
//!
//! ```no_run
//! use study_planner::{NewTask, NullRepository, Priority, StudyPlanner, TaskFilter};
//! use chrono::NaiveDate;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let planner = StudyPlanner::new(NullRepository)?;
//!     let due = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
//!     planner
//!         .add(NewTask::new("Revise chapter 2", "Biology", Priority::High, due))
//!         .await?;
//!     let pending = planner.list(TaskFilter::Pending).await;
//!     println!("{} pending", pending.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod planner;
pub mod reminder;
pub mod storage;
pub mod validation;

use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::debug;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use planner::{
    NewTask, Priority, StoreEvent, Task, TaskFilter, TaskStats, TaskStore, epoch_millis,
    is_overdue, local_now, schedule_reminder,
};
pub use reminder::{ReminderFired, ReminderHandle, ReminderScheduler, SharedStore};
pub use storage::{NullRepository, TaskRepository, TomlRepository};

/// Application service for the study planner
///
/// Owns the task store (shared with pending reminders) and the persistence
/// backend. Every successful mutation is followed by a `save`.
pub struct StudyPlanner {
    pub(crate) store: SharedStore,
    pub(crate) repository: Box<dyn TaskRepository>,
    pub(crate) reminders: ReminderScheduler,
}

impl StudyPlanner {
    /// Create a planner, restoring tasks from `repository`
    ///
    /// # Errors
    /// Fails if the repository cannot load its tasks.
    pub fn new(repository: impl TaskRepository + 'static) -> Result<Self> {
        let tasks = repository.load()?;
        let store: SharedStore = Arc::new(Mutex::new(TaskStore::from_tasks(tasks)));
        Ok(Self {
            reminders: ReminderScheduler::new(Arc::clone(&store)),
            store,
            repository: Box::new(repository),
        })
    }

    /// Shared handle to the underlying store
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Subscribe to store change notifications
    pub async fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.store.lock().await.subscribe()
    }

    /// Hand the current collection to the persistence hook
    fn persist(&self, store: &TaskStore) -> Result<()> {
        debug!(count = store.len(), "Persisting tasks");
        self.repository.save(store.tasks())
    }
}
