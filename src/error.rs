//! Error types for the study planner
//!
//! Validation and lookup failures are local, recoverable conditions that the
//! presentation layer shows to the user as messages. Storage failures only
//! come from the file-backed repository.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A creation field is missing or could not be parsed
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// An operation targeted a task id that is not in the collection
    #[error("Task not found: {0}")]
    NotFound(i64),

    /// The largest possible id has already been issued
    #[error("No task ids left after {0}")]
    IdsExhausted(i64),

    #[error("Failed to read or write task file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse task file: {0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl PlannerError {
    /// Shorthand for a required field that was left empty
    pub fn missing(field: &'static str) -> Self {
        PlannerError::Validation {
            field,
            reason: "this field is required".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PlannerError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PlannerError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
