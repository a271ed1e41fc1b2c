//! Toggle-complete handler for the study planner

use crate::StudyPlanner;
use crate::error::Result;
use crate::planner::Task;

impl StudyPlanner {
    /// Complete a pending task or reopen a completed one
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`](crate::PlannerError::NotFound) for an
    /// unknown id. A storage error means the flag was flipped in memory and
    /// the event sent, but the file was not updated.
    pub async fn toggle(&self, id: i64) -> Result<Task> {
        let mut store = self.store.lock().await;
        let task = store.toggle_complete(id)?;
        self.persist(&store)?;
        Ok(task)
    }
}
