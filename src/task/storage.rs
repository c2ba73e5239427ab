//! Task storage - JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{Result, StorageError};
use super::Task;

pub struct Storage {
    tasks_path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: path.into(),
            backup: true,
        }
    }

    /// Toggle the `.json.bak` copy taken before each overwrite
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    pub fn backup_path(&self) -> PathBuf {
        self.tasks_path.with_extension("json.bak")
    }

    pub fn exists(&self) -> bool {
        self.tasks_path.exists()
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path).map_err(|source| StorageError::Read {
            path: self.tasks_path.clone(),
            source,
        })?;

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: self.tasks_path.clone(),
                source,
            })?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.tasks_path.display());
        Ok(tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if self.backup && self.tasks_path.exists() {
            if let Err(e) = fs::copy(&self.tasks_path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        let write_err = |source| StorageError::Write {
            path: self.tasks_path.clone(),
            source,
        };

        if let Some(parent) = self.tasks_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.tasks_path, content).map_err(write_err)?;
        debug!("Saved {} tasks to {}", tasks.len(), self.tasks_path.display());
        Ok(())
    }
}
