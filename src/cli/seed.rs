//! `todo seed` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::generate_sample_tasks;
use crate::task::sample::{self, HOME_TITLES};

#[derive(Args)]
pub struct SeedArgs {
    /// Number of sample tasks (defaults to demo.sample_count)
    #[arg(short = 'n', long)]
    count: Option<usize>,
}

pub fn run(file: Option<PathBuf>, config: &Config, args: SeedArgs) -> Result<()> {
    let mut manager = super::open_manager(file, config)?;
    let count = args.count.unwrap_or(config.demo.sample_count);

    let samples = generate_sample_tasks(&mut rand::thread_rng(), HOME_TITLES, count);
    let added = samples.len();
    sample::seed(&mut manager, samples)?;

    println!("Added {} sample tasks ({} total)", added, manager.tasks().len());
    Ok(())
}
