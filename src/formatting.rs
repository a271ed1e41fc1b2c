//! Formatting helper functions for the presentation layer
//!
//! Renders task cards, statistics and transient notices as plain text.

use crate::planner::{StoreEvent, Task, TaskStats, is_overdue};
use chrono::{NaiveDate, NaiveDateTime};

/// Format a due date for display (e.g. "Mar 5, 2025")
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a single task card
pub fn format_task(task: &Task, now: NaiveDateTime) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut result = format!(
        "[{}] #{} {} ({})\n",
        mark, task.id, task.title, task.priority
    );
    result.push_str(&format!("  Subject: {}\n", task.subject));

    result.push_str(&format!("  Due: {}", format_due_date(task.due_date)));
    if is_overdue(task, now) {
        result.push_str(" ⚠️ Overdue");
    }
    result.push('\n');

    if let Some(time) = task.due_time {
        result.push_str(&format!("  Time: {}\n", time.format("%H:%M")));
    }
    if let Some(ref notes) = task.notes {
        result.push_str(&format!("  Notes: {}\n", notes));
    }
    result
}

/// Format an ordered task list
pub fn format_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: NaiveDateTime) -> String {
    let cards: Vec<String> = tasks.into_iter().map(|t| format_task(t, now)).collect();
    if cards.is_empty() {
        return "No tasks found. 📝".to_string();
    }
    cards.join("\n")
}

pub fn format_stats(stats: &TaskStats) -> String {
    format!(
        "Total: {} | Completed: {} | Progress: {}%",
        stats.total, stats.completed, stats.progress_percent
    )
}

/// Transient notice shown after a store change
pub fn notice_for(event: &StoreEvent) -> &'static str {
    match event {
        StoreEvent::Added { .. } => "Task added successfully! 🎉",
        StoreEvent::Toggled {
            completed: true, ..
        } => "Task completed! 🎊",
        StoreEvent::Toggled {
            completed: false, ..
        } => "Task reopened!",
        StoreEvent::Deleted { .. } => "Task deleted!",
    }
}
