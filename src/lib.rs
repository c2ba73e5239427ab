//! todo-manager library - a personal to-do list with optional JSON file persistence

pub mod cli;
pub mod config;
pub mod demo;
pub mod task;
