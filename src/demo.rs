//! Demo routines that seed a manager with sample tasks and walk through
//! add / list / complete / query

use anyhow::Result;
use rand::Rng;
use std::io::Write;

use crate::task::sample::{self, DAILY_TITLES, HOME_TITLES};
use crate::task::{generate_sample_tasks, Storage, TaskManager};

/// In-memory walkthrough
pub fn run_in_memory<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    count: usize,
) -> Result<()> {
    let mut manager = TaskManager::new();
    sample::seed(&mut manager, generate_sample_tasks(rng, DAILY_TITLES, count))?;

    writeln!(out, "All Tasks:")?;
    for task in manager.tasks() {
        writeln!(out, "{}", task)?;
    }

    writeln!(out, "\nCompleting first task...\n")?;
    if let Some(first) = manager.tasks().first().map(|t| t.id) {
        manager.complete_task(&first)?;
    }

    writeln!(out, "Pending Tasks:")?;
    for task in manager.get_pending_tasks() {
        writeln!(out, "{}", task)?;
    }

    writeln!(out, "\nCompleted Tasks:")?;
    for task in manager.get_completed_tasks() {
        writeln!(out, "{}", task)?;
    }

    Ok(())
}

/// File-backed walkthrough. Tasks already in `storage` are kept and the
/// samples are appended after them.
pub fn run_persistent<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    count: usize,
    storage: Storage,
) -> Result<()> {
    let mut manager = TaskManager::with_storage(storage)?;
    sample::seed(&mut manager, generate_sample_tasks(rng, HOME_TITLES, count))?;

    writeln!(out, "All Tasks:")?;
    for line in manager.list_tasks() {
        writeln!(out, "{}", line)?;
    }

    if let Some(first) = manager.tasks().first().map(|t| t.id) {
        manager.complete_task(&first)?;
    }

    writeln!(out, "\nPending:")?;
    for task in manager.get_pending_tasks() {
        writeln!(out, "{}", task.title)?;
    }

    writeln!(out, "\nCompleted:")?;
    for task in manager.get_completed_tasks() {
        writeln!(out, "{}", task.title)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn section<'a>(output: &'a str, header: &str) -> Vec<&'a str> {
        output
            .split(header)
            .nth(1)
            .unwrap_or_default()
            .lines()
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_in_memory_demo_output() -> anyhow::Result<()> {
        let mut out = Vec::new();
        run_in_memory(&mut out, &mut StdRng::seed_from_u64(5), 5)?;
        let output = String::from_utf8(out)?;

        assert!(output.starts_with("All Tasks:\n"));
        assert!(output.contains("Completing first task..."));
        assert_eq!(section(&output, "All Tasks:").len(), 5);
        assert_eq!(section(&output, "Pending Tasks:").len(), 4);

        let completed = section(&output, "Completed Tasks:");
        assert_eq!(completed.len(), 1);
        assert!(completed[0].ends_with(" - Done"));
        Ok(())
    }

    #[test]
    fn test_in_memory_demo_with_no_tasks() -> anyhow::Result<()> {
        let mut out = Vec::new();
        run_in_memory(&mut out, &mut StdRng::seed_from_u64(5), 0)?;
        let output = String::from_utf8(out)?;

        assert!(section(&output, "Pending Tasks:").is_empty());
        assert!(section(&output, "Completed Tasks:").is_empty());
        Ok(())
    }

    #[test]
    fn test_persistent_demo_writes_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");

        let mut out = Vec::new();
        run_persistent(&mut out, &mut StdRng::seed_from_u64(9), 3, Storage::new(&path))?;
        let output = String::from_utf8(out)?;

        let all = section(&output, "All Tasks:");
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|l| l.starts_with("[✗] ")));
        assert_eq!(section(&output, "Pending:").len(), 2);
        assert_eq!(section(&output, "Completed:").len(), 1);

        let stored = Storage::new(&path).load()?;
        assert_eq!(stored.len(), 3);
        assert!(stored[0].completed);
        Ok(())
    }

    #[test]
    fn test_persistent_demo_appends_to_existing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");

        let mut rng = StdRng::seed_from_u64(11);
        run_persistent(&mut std::io::sink(), &mut rng, 3, Storage::new(&path))?;
        run_persistent(&mut std::io::sink(), &mut rng, 3, Storage::new(&path))?;

        let stored = Storage::new(&path).load()?;
        assert_eq!(stored.len(), 6);
        assert_eq!(stored.iter().filter(|t| t.completed).count(), 1);
        Ok(())
    }
}
