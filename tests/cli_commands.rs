//! End-to-end tests for the `todo` binary
//!
//! Each test points HOME at a temp directory so the user's real task file
//! and config are never touched.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn todo(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .env("HOME", home)
        .env_remove("TODO_MANAGER_FILE")
        .env_remove("TODO_MANAGER_DEBUG")
        .output()
        .expect("Failed to run todo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn first_id(home: &Path, file: &str) -> String {
    let output = todo(home, &["--file", file, "list", "--json"]);
    let values: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    values[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_add_list_done_remove() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("tasks.json");
    let file = file.to_str().unwrap();

    let output = todo(home.path(), &["--file", file, "add", "Buy milk", "--due", "2024-01-01"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created: [✗] Buy milk (Due: 2024-01-01)"));

    let output = todo(home.path(), &["--file", file, "list"]);
    assert!(stdout(&output).contains("[✗] Buy milk"));

    let id = first_id(home.path(), file);
    let output = todo(home.path(), &["--file", file, "done", &id[..8]]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Completed: [✓] Buy milk"));

    let output = todo(home.path(), &["--file", file, "list", "--pending"]);
    assert!(stdout(&output).contains("No tasks found"));

    let output = todo(home.path(), &["--file", file, "remove", &id]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Removed: Buy milk"));

    let output = todo(home.path(), &["--file", file, "list"]);
    assert!(stdout(&output).contains("No tasks found"));
}

#[test]
fn test_done_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("tasks.json");
    let file = file.to_str().unwrap();

    todo(home.path(), &["--file", file, "add", "Something"]);
    let output = todo(home.path(), &["--file", file, "done", "zzzz"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Task not found"));
}

#[test]
fn test_default_file_lives_in_app_dir() {
    let home = TempDir::new().unwrap();

    let output = todo(home.path(), &["seed", "-n", "3"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Added 3 sample tasks (3 total)"));
    assert!(home.path().join(".todo-manager").join("tasks.json").exists());
}

#[test]
fn test_no_subcommand_runs_in_memory_demo() {
    let home = TempDir::new().unwrap();

    let output = todo(home.path(), &[]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("All Tasks:"));
    assert!(out.contains("Completed Tasks:"));
    assert!(!home.path().join(".todo-manager").exists());
}

#[test]
fn test_persistent_demo_writes_task_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("demo.json");

    let output = todo(
        home.path(),
        &["--file", file.to_str().unwrap(), "demo", "--persist", "-n", "2"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("Pending:"));
    assert!(file.exists());
}
