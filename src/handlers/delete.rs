//! Delete handler for the study planner
//!
//! Confirmation happens in the presentation layer before this is called.

use crate::StudyPlanner;
use crate::error::Result;

impl StudyPlanner {
    /// Permanently remove a task
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`](crate::PlannerError::NotFound) for an
    /// unknown id. A storage error means the task is already gone from memory
    /// and the event sent, but the file still holds it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut store = self.store.lock().await;
        store.delete_task(id)?;
        self.persist(&store)?;
        Ok(())
    }
}
