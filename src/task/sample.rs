//! Random sample tasks for demos and seeding

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::Result;
use super::manager::TaskManager;

pub const DAILY_TITLES: &[&str] = &[
    "Buy groceries",
    "Read a book",
    "Call Alice",
    "Fix the bike",
    "Water plants",
];

pub const HOME_TITLES: &[&str] = &[
    "Walk dog",
    "Do taxes",
    "Write blog post",
    "Study math",
    "Call parents",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SampleTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

/// Pick `count` titles from `titles` at random. Returns nothing if `titles`
/// is empty.
pub fn generate_sample_tasks<R: Rng + ?Sized>(
    rng: &mut R,
    titles: &[&str],
    count: usize,
) -> Vec<SampleTask> {
    (0..count)
        .filter_map(|_| titles.choose(&mut *rng))
        .map(|title| SampleTask {
            title: title.to_string(),
            description: format!("{} description", title),
            due_date: Utc::now(),
        })
        .collect()
}

/// Add every sample to the manager, in order
pub fn seed(manager: &mut TaskManager, samples: Vec<SampleTask>) -> Result<()> {
    for sample in samples {
        manager.add_task(sample.title, sample.description, sample.due_date)?;
    }
    Ok(())
}
