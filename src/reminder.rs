//! One-shot due-time reminders
//!
//! A reminder is a timer on the Tokio runtime. When it fires it looks the
//! task up again and only notifies if the task still exists and is still
//! pending. The returned [`ReminderHandle`] can cancel the timer before then.

use crate::planner::{Task, TaskStore, schedule_reminder};
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

/// Store shared between the application layer and pending reminders
pub type SharedStore = Arc<Mutex<TaskStore>>;

/// Payload delivered to the callback when a reminder fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderFired {
    pub task_id: i64,
    pub title: String,
    pub due_time: NaiveTime,
}

impl ReminderFired {
    /// User-facing reminder text
    pub fn message(&self) -> String {
        format!(
            "⏰ Reminder: {}\nDue today at {}",
            self.title,
            self.due_time.format("%H:%M")
        )
    }
}

/// Handle to a scheduled reminder
#[derive(Debug)]
pub struct ReminderHandle {
    task_id: i64,
    delay: Duration,
    handle: JoinHandle<bool>,
}

impl ReminderHandle {
    pub fn task_id(&self) -> i64 {
        self.task_id
    }

    /// Delay the timer was armed with
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel the reminder; a no-op if it already fired
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the timer to complete
    ///
    /// Returns `true` if the callback was invoked, `false` if the task was
    /// completed or deleted in the meantime or the reminder was cancelled.
    pub async fn wait(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}

/// Arms reminder timers against a shared store
#[derive(Debug, Clone)]
pub struct ReminderScheduler {
    store: SharedStore,
}

impl ReminderScheduler {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Schedule a reminder for `task` relative to `now`
    ///
    /// Returns `None` when the task has no due time or its due moment has
    /// already passed. Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, task: &Task, now: NaiveDateTime, on_fire: F) -> Option<ReminderHandle>
    where
        F: FnOnce(ReminderFired) + Send + 'static,
    {
        let delay = schedule_reminder(task, now)?;
        let due_time = task.due_time?;
        let task_id = task.id;
        let store = Arc::clone(&self.store);
        let deadline = Instant::now() + delay;

        debug!(task_id, delay_secs = delay.as_secs(), "Reminder scheduled");

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let fired = {
                let store = store.lock().await;
                match store.get(task_id) {
                    Some(task) if task.is_pending() => Some(ReminderFired {
                        task_id,
                        title: task.title.clone(),
                        due_time,
                    }),
                    _ => None,
                }
            };

            match fired {
                Some(event) => {
                    info!(task_id, "Reminder fired");
                    on_fire(event);
                    true
                }
                None => {
                    debug!(task_id, "Reminder skipped, task is no longer pending");
                    false
                }
            }
        });

        Some(ReminderHandle {
            task_id,
            delay,
            handle,
        })
    }
}
