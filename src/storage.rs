//! Persistence hooks for the task collection
//!
//! The presentation layer restores the collection with `load` at startup and
//! hands it back to `save` after every mutation.

use crate::error::Result;
use crate::planner::Task;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Format version written to task files
pub const FORMAT_VERSION: u32 = 1;

pub trait TaskRepository: Send + Sync {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Keeps nothing: every session starts with an empty collection
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRepository;

impl TaskRepository for NullRepository {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(Vec::new())
    }

    fn save(&self, _tasks: &[Task]) -> Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct TaskFileRef<'a> {
    format_version: u32,
    tasks: &'a [Task],
}

#[derive(Deserialize)]
struct TaskFile {
    #[serde(default)]
    format_version: u32,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Stores the collection as a TOML document
#[derive(Debug, Clone)]
pub struct TomlRepository {
    file_path: PathBuf,
}

impl TomlRepository {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskRepository for TomlRepository {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "Task file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let file: TaskFile = toml::from_str(&content)?;
        if file.format_version > FORMAT_VERSION {
            warn!(
                found = file.format_version,
                supported = FORMAT_VERSION,
                "Task file was written by a newer version"
            );
        }
        Ok(file.tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = toml::to_string_pretty(&TaskFileRef {
            format_version: FORMAT_VERSION,
            tasks,
        })?;
        fs::write(&self.file_path, content)?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "Tasks saved");
        Ok(())
    }
}
