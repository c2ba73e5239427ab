//! `todo list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::{Task, TaskManager};

const TABLE_COL_ID_DISPLAY: usize = 8;
const TABLE_COL_TITLE: usize = 30;

#[derive(Args)]
pub struct ListArgs {
    /// Only pending tasks
    #[arg(long, conflicts_with = "completed")]
    pending: bool,

    /// Only completed tasks
    #[arg(long)]
    completed: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn select<'a>(manager: &'a TaskManager, args: &ListArgs) -> Vec<&'a Task> {
    if args.pending {
        manager.get_pending_tasks()
    } else if args.completed {
        manager.get_completed_tasks()
    } else {
        manager.tasks().iter().collect()
    }
}

fn format_row(task: &Task) -> String {
    let id = task.id.to_string();
    format!(
        "{:<width_id$}  [{}] {:<width_title$} {}",
        super::truncate_id(&id, TABLE_COL_ID_DISPLAY),
        task.status_marker(),
        super::truncate(&task.title, TABLE_COL_TITLE),
        task.due_date.format("%Y-%m-%d"),
        width_id = TABLE_COL_ID_DISPLAY,
        width_title = TABLE_COL_TITLE,
    )
}

pub fn run(file: Option<PathBuf>, config: &Config, args: ListArgs) -> Result<()> {
    let manager = super::open_manager(file, config)?;
    let tasks = select(&manager, &args);

    if args.json {
        let values: Vec<serde_json::Value> = tasks.iter().map(|t| t.to_value()).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    println!("Tasks ({}):\n", tasks.len());
    for task in tasks {
        println!("{}", format_row(task));
    }

    Ok(())
}
