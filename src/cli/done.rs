//! `todo done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID or unique ID prefix
    id: String,
}

pub fn run(file: Option<PathBuf>, config: &Config, args: DoneArgs) -> Result<()> {
    let mut manager = super::open_manager(file, config)?;
    let id = super::resolve_task(&args.id, manager.tasks())?.id;

    manager.complete_task(&id)?;
    if let Some(task) = manager.get_task(&id) {
        println!("Completed: {}", task.list_line());
    }

    Ok(())
}
