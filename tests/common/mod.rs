//! Common test utilities for integration tests

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use study_planner::{NewTask, Priority, StudyPlanner, TaskStore, TomlRepository};
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_time(time(h, min))
}

/// Create a creation record with all required fields
pub fn new_task(title: &str, due_date: NaiveDate) -> NewTask {
    NewTask::new(title, "Mathematics", Priority::Medium, due_date)
}

/// Create a store holding the given (title, due date) tasks in order
pub fn store_with(tasks: &[(&str, NaiveDate)]) -> TaskStore {
    let mut store = TaskStore::new();
    for (title, due) in tasks {
        store.add_task(new_task(title, *due)).unwrap();
    }
    store
}

/// Create a planner backed by a TOML file in a temporary directory
pub fn get_test_planner() -> (StudyPlanner, TempDir) {
    let dir = TempDir::new().unwrap();
    let planner = StudyPlanner::new(TomlRepository::new(dir.path().join("tasks.toml"))).unwrap();
    (planner, dir)
}
