//! CLI command implementations

pub mod add;
pub mod definition;
pub mod demo;
pub mod done;
pub mod list;
pub mod remove;
pub mod seed;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::task::{Storage, Task, TaskManager};

/// Storage for the task file named on the command line, or the configured one
pub fn open_storage(file: Option<PathBuf>, config: &Config) -> Result<Storage> {
    let path = match file {
        Some(path) => path,
        None => config.tasks_path()?,
    };
    Ok(Storage::new(path).with_backup(config.storage.backup))
}

pub fn open_manager(file: Option<PathBuf>, config: &Config) -> Result<TaskManager> {
    Ok(TaskManager::with_storage(open_storage(file, config)?)?)
}

/// Find a task by full ID or unique ID prefix
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    let identifier = identifier.trim().to_ascii_lowercase();
    if identifier.is_empty() {
        bail!("Task ID must not be empty");
    }

    if let Some(task) = tasks.iter().find(|t| t.id.to_string() == identifier) {
        return Ok(task);
    }

    let mut matches = tasks
        .iter()
        .filter(|t| t.id.to_string().starts_with(&identifier));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task),
        (Some(_), Some(_)) => bail!("Ambiguous task ID: {}", identifier),
        (None, _) => bail!("Task not found: {}", identifier),
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

pub fn truncate_id(id: &str, max_len: usize) -> &str {
    if id.len() > max_len {
        &id[..max_len]
    } else {
        id
    }
}
