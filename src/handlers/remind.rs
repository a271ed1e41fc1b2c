//! Reminder handlers for the study planner

use crate::StudyPlanner;
use crate::error::{PlannerError, Result};
use crate::planner::TaskFilter;
use crate::reminder::{ReminderFired, ReminderHandle};
use chrono::NaiveDateTime;
use tracing::debug;

impl StudyPlanner {
    /// Schedule a reminder for one task
    ///
    /// Returns `Ok(None)` when the task has no due time or it has passed.
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`] if the id is unknown.
    pub async fn schedule_reminder<F>(
        &self,
        id: i64,
        now: NaiveDateTime,
        on_fire: F,
    ) -> Result<Option<ReminderHandle>>
    where
        F: FnOnce(ReminderFired) + Send + 'static,
    {
        let task = {
            let store = self.store.lock().await;
            store.get(id).cloned().ok_or(PlannerError::NotFound(id))?
        };
        Ok(self.reminders.schedule(&task, now, on_fire))
    }

    /// Schedule reminders for every pending task with an upcoming due time
    pub async fn schedule_all_reminders<F>(&self, now: NaiveDateTime, on_fire: F) -> Vec<ReminderHandle>
    where
        F: Fn(ReminderFired) + Clone + Send + 'static,
    {
        let pending = self.list(TaskFilter::Pending).await;
        let handles: Vec<ReminderHandle> = pending
            .iter()
            .filter_map(|task| self.reminders.schedule(task, now, on_fire.clone()))
            .collect();
        debug!(count = handles.len(), "Reminders scheduled");
        handles
    }
}
