//! `todo demo` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::demo;

#[derive(Args, Default)]
pub struct DemoArgs {
    /// Persist tasks to the task file instead of keeping them in memory
    #[arg(long)]
    persist: bool,

    /// Number of sample tasks (defaults to demo.sample_count)
    #[arg(short = 'n', long)]
    count: Option<usize>,
}

pub fn run(file: Option<PathBuf>, config: &Config, args: DemoArgs) -> Result<()> {
    let count = args.count.unwrap_or(config.demo.sample_count);
    let mut rng = rand::thread_rng();
    let mut out = std::io::stdout().lock();

    if args.persist {
        let storage = super::open_storage(file, config)?;
        demo::run_persistent(&mut out, &mut rng, count, storage)
    } else {
        demo::run_in_memory(&mut out, &mut rng, count)
    }
}
