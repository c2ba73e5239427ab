//! Task data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::timestamp;

/// Unique task identifier, stored as a hyphenated UUID string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a fresh random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: TaskId,

    /// Short label
    pub title: String,

    /// Free-form details
    pub description: String,

    /// When the task is due
    #[serde(with = "timestamp")]
    pub due_date: DateTime<Utc>,

    /// Whether the task has been completed
    pub completed: bool,

    /// When the task was created
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            due_date,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Mark task as done. Repeated calls have no further effect.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    /// Convert to a JSON object with ISO-8601 timestamps
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id.to_string(),
            "title": self.title,
            "description": self.description,
            "due_date": timestamp::format(&self.due_date),
            "completed": self.completed,
            "created_at": timestamp::format(&self.created_at),
        })
    }

    /// Build a task from a JSON object produced by [`Task::to_value`]
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Status marker used in listings
    pub fn status_marker(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "✗"
        }
    }

    /// Format as a listing line: `[✓] Title (Due: 2024-01-01)`
    pub fn list_line(&self) -> String {
        format!(
            "[{}] {} (Due: {})",
            self.status_marker(),
            self.title,
            self.due_date.format("%Y-%m-%d")
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "Done" } else { "Pending" };
        write!(f, "{} - {}", self.title, status)
    }
}
