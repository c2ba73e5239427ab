//! `todo add` command implementation

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::timestamp;

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Due date (YYYY-MM-DD or ISO-8601 timestamp, defaults to now)
    #[arg(long, value_parser = parse_due)]
    due: Option<DateTime<Utc>>,
}

/// Accept a bare date (midnight UTC) or a full timestamp
pub fn parse_due(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    timestamp::parse(s).ok_or_else(|| format!("invalid due date '{}', expected YYYY-MM-DD", s))
}

pub fn run(file: Option<PathBuf>, config: &Config, args: AddArgs) -> Result<()> {
    let mut manager = super::open_manager(file, config)?;
    let due = args.due.unwrap_or_else(Utc::now);

    let id = manager.add_task(args.title, args.description, due)?;
    if let Some(task) = manager.get_task(&id) {
        println!("Created: {}", task.list_line());
        println!("  ID: {}", task.id);
    }

    Ok(())
}
