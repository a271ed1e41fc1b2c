use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date and time in the local timezone
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Milliseconds since the Unix epoch for a local wall-clock time
///
/// A time inside a DST gap has no local instant; it is read as UTC instead.
pub fn epoch_millis(at: NaiveDateTime) -> i64 {
    at.and_local_timezone(Local)
        .earliest()
        .map(|t| t.timestamp_millis())
        .unwrap_or_else(|| at.and_utc().timestamp_millis())
}

/// Priority of a study task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

/// A single study-planning record
///
/// `id` and `created_at` are assigned by the store and never change.
/// `completed` only changes through [`TaskStore::toggle_complete`](super::TaskStore::toggle_complete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation-timestamp-derived identifier, unique within a store
    pub id: i64,
    pub title: String,
    /// Free text category label (e.g. "Mathematics")
    pub subject: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Combined due moment, if the task has a time of day
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_time.map(|time| self.due_date.and_time(time))
    }
}

/// Fields supplied when creating a task
///
/// Mirrors the creation form: every field may be left empty, and
/// [`TaskStore::add_task`](super::TaskStore::add_task) rejects the record
/// when a required one is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub subject: String,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            priority: Some(priority),
            due_date: Some(due_date),
            due_time: None,
            notes: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.due_time = Some(time);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
