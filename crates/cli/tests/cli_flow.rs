use std::path::Path;

use clap::Parser;
use stockroom_cli::{Cli, Command};
use stockroom_inventory::InventoryStore;
use stockroom_observability::LogBuffer;

fn run_with(file: &Path, args: &[&str]) -> (String, LogBuffer) {
    let file = file.to_str().unwrap();
    let argv = ["stockroom", "--file", file]
        .into_iter()
        .chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();

    let logs = LogBuffer::new();
    let mut store = InventoryStore::with_dispatch(logs.dispatch());
    let mut out = Vec::new();
    tracing::dispatcher::with_default(&logs.dispatch(), || {
        stockroom_cli::run(&cli, &mut store, &mut out).unwrap();
    });
    (String::from_utf8(out).unwrap(), logs)
}

#[test]
fn no_subcommand_runs_demo() {
    let cli = Cli::try_parse_from(["stockroom"]).unwrap();
    assert_eq!(cli.command(), Command::Demo);
    assert_eq!(cli.file, Path::new("inventory.json"));
}

#[test]
fn demo_prints_stock_low_items_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    let (out, logs) = run_with(&file, &["demo"]);

    assert_eq!(
        out,
        "Apple stock: 7\n\
         Low items: []\n\
         \n\
         === Inventory Report ===\n\
         [ITEM] apple -> 7 units\n\
         [ITEM] banana -> 15 units\n\
         ========================\n"
    );
    let saved = std::fs::read_to_string(&file).unwrap();
    assert_eq!(saved, "{\n  \"apple\": 7,\n  \"banana\": 15\n}\n");
    assert!(!logs.contents().contains("ERROR"));
}

#[test]
fn add_persists_and_prints_activity() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    let (out, _) = run_with(&file, &["add", "apple", "4"]);
    assert!(out.trim_end().ends_with(": Added 4 of apple"));

    run_with(&file, &["add", "apple", "2"]);
    let (out, _) = run_with(&file, &["get", "apple"]);
    assert_eq!(out, "apple: 6\n");
}

#[test]
fn remove_and_low_use_saved_stock() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("inventory.json");
    std::fs::write(&file, r#"{"apple": 10, "kiwi": 2}"#).unwrap();

    let (out, _) = run_with(&file, &["remove", "apple", "6"]);
    assert_eq!(out, "Removed 6 of apple\n");

    let (out, _) = run_with(&file, &["low"]);
    assert_eq!(out, "Low items: [\"apple\", \"kiwi\"]\n");

    let (out, _) = run_with(&file, &["low", "--threshold", "3"]);
    assert_eq!(out, "Low items: [\"kiwi\"]\n");
}

#[test]
fn failures_are_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    let (out, logs) = run_with(&file, &["remove", "pear", "1"]);
    assert_eq!(out, "Operation failed: item 'pear' not found in inventory\n");
    assert!(logs.contents().contains("Application error: item 'pear' not found"));
    assert!(!file.exists());

    let (out, _) = run_with(&file, &["add", "apple", "-5"]);
    assert!(out.starts_with("Operation failed: invalid argument:"));

    let (out, _) = run_with(&file, &["low", "--threshold", "-1"]);
    assert!(out.starts_with("Operation failed: invalid argument:"));
}

#[test]
fn corrupt_file_starts_from_empty_stock() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("inventory.json");
    std::fs::write(&file, "not json at all").unwrap();

    let (out, logs) = run_with(&file, &["report"]);
    assert_eq!(out, "Inventory is empty\n");
    assert!(logs.contents().contains("Could not load data:"));
}

#[test]
fn demo_save_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("missing-dir").join("inventory.json");

    let (out, logs) = run_with(&file, &["demo"]);
    assert!(out.contains("Apple stock: 7"));
    assert!(out.trim_end().lines().last().unwrap().starts_with("Operation failed:"));
    assert!(logs.contents().contains("Failed to save data:"));
}
