//! Derived views over the task collection
//!
//! Filtering, ordering, statistics and the time-based predicates used by the
//! presentation layer. None of these mutate the store.

use super::task::Task;
use super::task_store::TaskStore;
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// View selector over the task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
        })
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, pending, completed",
                s
            )),
        }
    }
}

/// Aggregate progress over the whole collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// `completed / total` as a whole percentage, rounded half up; 0 when empty
    pub progress_percent: u32,
}

impl TaskStats {
    pub fn from_counts(total: usize, completed: usize) -> Self {
        let progress_percent = if total == 0 {
            0
        } else {
            ((completed * 100 + total / 2) / total) as u32
        };
        Self {
            total,
            completed,
            progress_percent,
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

impl TaskStore {
    /// Tasks matching `filter`, ordered by due date
    ///
    /// The sort is stable: tasks due on the same date keep insertion order.
    pub fn list_tasks(&self, filter: TaskFilter) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| filter.matches(t)).collect();
        tasks.sort_by_key(|t| t.due_date);
        tasks
    }

    pub fn compute_stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats::from_counts(self.tasks.len(), completed)
    }

    /// Pending tasks for which [`is_overdue`] holds at `now`
    pub fn overdue_tasks(&self, now: NaiveDateTime) -> Vec<&Task> {
        self.list_tasks(TaskFilter::Pending)
            .into_iter()
            .filter(|t| is_overdue(t, now))
            .collect()
    }
}

/// A task is overdue when the start of its due date is strictly before `now`
/// and it is still pending
///
/// The due time is not considered: a task due today becomes overdue as soon
/// as the day has started.
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    !task.completed && task.due_date.and_time(NaiveTime::MIN) < now
}

/// Delay until the task's reminder should fire
///
/// Returns `None` when the task has no due time or the due moment is not in
/// the future relative to `now`.
pub fn schedule_reminder(task: &Task, now: NaiveDateTime) -> Option<Duration> {
    let due_at = task.due_at()?;
    if due_at <= now {
        return None;
    }
    (due_at - now).to_std().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_rounds_half_up() {
        assert_eq!(TaskStats::from_counts(0, 0).progress_percent, 0);
        assert_eq!(TaskStats::from_counts(3, 1).progress_percent, 33);
        assert_eq!(TaskStats::from_counts(3, 2).progress_percent, 67);
        assert_eq!(TaskStats::from_counts(8, 1).progress_percent, 13);
        assert_eq!(TaskStats::from_counts(4, 4).progress_percent, 100);
    }

    #[test]
    fn test_pending_count() {
        assert_eq!(TaskStats::from_counts(5, 2).pending(), 3);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<TaskFilter>(), Ok(TaskFilter::All));
        assert_eq!("Pending".parse::<TaskFilter>(), Ok(TaskFilter::Pending));
        assert_eq!("completed".parse::<TaskFilter>(), Ok(TaskFilter::Completed));
        assert!("done".parse::<TaskFilter>().is_err());
    }
}
