//! List and statistics handlers for the study planner

use crate::StudyPlanner;
use crate::planner::{Task, TaskFilter, TaskStats};
use chrono::NaiveDateTime;

impl StudyPlanner {
    /// Snapshot of the tasks matching `filter`, ordered by due date
    pub async fn list(&self, filter: TaskFilter) -> Vec<Task> {
        let store = self.store.lock().await;
        store.list_tasks(filter).into_iter().cloned().collect()
    }

    pub async fn stats(&self) -> TaskStats {
        self.store.lock().await.compute_stats()
    }

    /// Snapshot of pending tasks whose due date is before `now`
    pub async fn overdue(&self, now: NaiveDateTime) -> Vec<Task> {
        let store = self.store.lock().await;
        store.overdue_tasks(now).into_iter().cloned().collect()
    }
}
