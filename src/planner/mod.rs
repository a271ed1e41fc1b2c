//! Study planner domain model
//!
//! - `task`: the task record, its priority and the creation fields
//! - `task_store`: the collection owner and its mutating operations
//! - `queries`: filtered/sorted views, statistics and time predicates
//! - `events`: change notifications emitted by the store

mod events;
mod queries;
mod task;
mod task_store;

pub use events::StoreEvent;
pub use queries::{TaskFilter, TaskStats, is_overdue, schedule_reminder};
pub use task::{NewTask, Priority, Task, epoch_millis, local_now};
pub use task_store::TaskStore;
