//! Application operations for the study planner
//!
//! Each operation lives in its own file as an `impl StudyPlanner` block.

pub mod add;
pub mod delete;
pub mod list;
pub mod remind;
pub mod toggle;
