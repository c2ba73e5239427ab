//! Ordered task collection with optional file persistence

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::debug;

use super::error::Result;
use super::model::{Task, TaskId};
use super::storage::Storage;

/// Holds tasks in insertion order. When a [`Storage`] is attached, every
/// mutation rewrites the whole file before returning.
#[derive(Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
    storage: Option<Storage>,
}

impl TaskManager {
    /// Create an empty, in-memory manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a file-backed manager, loading any tasks already stored at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_storage(Storage::new(path))
    }

    pub fn with_storage(storage: Storage) -> Result<Self> {
        let mut manager = Self {
            tasks: Vec::new(),
            storage: Some(storage),
        };
        manager.load_tasks()?;
        Ok(manager)
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Result<TaskId> {
        let task = Task::new(title, description, due_date);
        let id = task.id;
        debug!("Adding task {} ({})", id, task.title);
        self.tasks.push(task);
        self.save_tasks()?;
        Ok(id)
    }

    /// Remove every task with this ID. Unknown IDs are ignored.
    pub fn remove_task(&mut self, id: &TaskId) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        debug!("Removed {} task(s) with id {}", before - self.tasks.len(), id);
        self.save_tasks()
    }

    /// Mark the first task with this ID complete. Unknown IDs are ignored.
    pub fn complete_task(&mut self, id: &TaskId) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) {
            task.mark_complete();
            debug!("Completed task {} ({})", id, task.title);
            self.save_tasks()?;
        }
        Ok(())
    }

    pub fn get_pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    pub fn get_completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    pub fn list_tasks(&self) -> Vec<String> {
        self.tasks.iter().map(Task::list_line).collect()
    }

    /// Replace the in-memory tasks with the stored ones, if the file exists
    pub fn load_tasks(&mut self) -> Result<()> {
        if let Some(storage) = &self.storage {
            if storage.exists() {
                self.tasks = storage.load()?;
            }
        }
        Ok(())
    }

    /// Write every task to storage. No-op without storage.
    pub fn save_tasks(&self) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.save(&self.tasks),
            None => Ok(()),
        }
    }
}
