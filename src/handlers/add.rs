//! Add handler for the study planner

use crate::StudyPlanner;
use crate::error::Result;
use crate::planner::{NewTask, Task};

impl StudyPlanner {
    /// Validate and add a new task, then persist the collection
    ///
    /// # Errors
    /// Returns a validation error when a required field is missing, or a
    /// storage error if saving fails. In the latter case the task has already
    /// been added in memory and its [`StoreEvent::Added`](crate::StoreEvent)
    /// has been sent; only the file is behind.
    pub async fn add(&self, new_task: NewTask) -> Result<Task> {
        let mut store = self.store.lock().await;
        let task = store.add_task(new_task)?;
        self.persist(&store)?;
        Ok(task)
    }
}
