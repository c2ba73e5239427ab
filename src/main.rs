//! todo - personal to-do list

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_manager::cli::{self, Cli, Commands};
use todo_manager::config::Config;

fn main() -> Result<()> {
    if std::env::var("TODO_MANAGER_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_manager=debug")
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let file = cli.file;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(file, &config, args),
        Some(Commands::List(args)) => cli::list::run(file, &config, args),
        Some(Commands::Done(args)) => cli::done::run(file, &config, args),
        Some(Commands::Remove(args)) => cli::remove::run(file, &config, args),
        Some(Commands::Seed(args)) => cli::seed::run(file, &config, args),
        Some(Commands::Demo(args)) => cli::demo::run(file, &config, args),
        None => cli::demo::run(file, &config, Default::default()),
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
