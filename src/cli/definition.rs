//! Top-level clap definitions for the `todo` binary

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::demo::DemoArgs;
use super::done::DoneArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::seed::SeedArgs;

#[derive(Parser)]
#[command(name = "todo", version, about = "Personal to-do list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task file (defaults to the configured path, then ~/.todo-manager/tasks.json)
    #[arg(short, long, global = true, env = "TODO_MANAGER_FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task as done
    Done(DoneArgs),

    /// Remove a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Add random sample tasks
    Seed(SeedArgs),

    /// Run the sample walkthrough
    Demo(DemoArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
