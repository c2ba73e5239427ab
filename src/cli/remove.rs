//! `todo remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID or unique ID prefix
    id: String,
}

pub fn run(file: Option<PathBuf>, config: &Config, args: RemoveArgs) -> Result<()> {
    let mut manager = super::open_manager(file, config)?;
    let task = super::resolve_task(&args.id, manager.tasks())?;
    let (id, title) = (task.id, task.title.clone());

    manager.remove_task(&id)?;
    println!("Removed: {}", title);

    Ok(())
}
