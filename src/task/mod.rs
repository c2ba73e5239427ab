//! Task management module
//!
//! - Task model with ISO-8601 JSON mapping
//! - In-memory task manager with optional JSON file persistence
//! - Random sample task generation

pub mod error;
pub mod manager;
pub mod model;
pub mod sample;
pub mod storage;
pub mod timestamp;

pub use error::StorageError;
pub use manager::TaskManager;
pub use model::{Task, TaskId};
pub use sample::{generate_sample_tasks, SampleTask};
pub use storage::Storage;
