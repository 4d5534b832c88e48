use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Runs the `library` binary with `args`, feeding `input` on stdin.
fn run_library(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_library"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run library");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for library")
}

fn run_with_data(data_file: &Path, input: &str) -> Output {
    run_library(&["--data-file", data_file.to_str().unwrap()], input)
}

fn stored(data_file: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(data_file).expect("data file exists");
    serde_json::from_str(&raw).expect("data file is valid JSON")
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn exit_creates_empty_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("library_data.json");

    let output = run_with_data(&data, "6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. Add Book"));
    assert!(stdout.contains("Exiting the system. Goodbye!"));
    assert_eq!(stored(&data), serde_json::json!([]));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("library_data.json");

    let output = run_with_data(&data, "");

    assert!(output.status.success());
}

#[test]
fn missing_config_file_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.yml");

    let output = run_library(&["--config", config.to_str().unwrap()], "6\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to load config"));
}

#[test]
fn config_file_selects_data_file_and_policy() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("books.json");
    let config = dir.path().join("library.yml");
    std::fs::write(
        &config,
        format!("data_file: {}\nid_policy: max_plus_one\n", data.display()),
    )
    .unwrap();

    let input = "1\nA\na\n2000\n1\nB\nb\n2001\n2\n1\n1\nC\nc\n2002\n6\n";
    let output = run_library(&["--config", config.to_str().unwrap()], input);

    assert!(output.status.success());
    let ids: Vec<u64> = stored(&data)
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

// ---------------------------------------------------------------------------
// Session scenarios
// ---------------------------------------------------------------------------

#[test]
fn add_then_display_writes_expected_record() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("library_data.json");

    let output = run_with_data(&data, "1\nA\nB\n1999\n4\n6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Book 'A' added successfully!"));
    assert!(stdout.contains("ID: 1, Title: A, Author: B, Year: 1999, Status: available"));
    assert_eq!(
        stored(&data),
        serde_json::json!([
            {"id": 1, "title": "A", "author": "B", "year": 1999, "status": "available"}
        ])
    );
}

#[test]
fn state_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("library_data.json");

    run_with_data(&data, "1\nBook Title\nBook Author\n2020\n6\n");
    run_with_data(&data, "5\n1\nissued\n6\n");
    let output = run_with_data(&data, "3\ntitle\nbook\n6\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: issued"));

    run_with_data(&data, "2\n1\n6\n");
    assert_eq!(stored(&data), serde_json::json!([]));
}

#[test]
fn validation_errors_do_not_end_session() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("library_data.json");

    let input = "1\nT\nA\nyear\n2\nx\n3\nisbn\n123\n5\n1\nlost\n7\n1\nT\nA\n2001\n6\n";
    let output = run_with_data(&data, input);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Year must be a number!"));
    assert!(stdout.contains("Invalid ID. Please enter a number."));
    assert!(stdout.contains("Invalid search criteria."));
    assert!(stdout.contains("Invalid status. Please choose 'available' or 'issued'."));
    assert!(stdout.contains("Invalid choice. Please try again."));
    assert!(stdout.contains("Book 'T' added successfully!"));
    assert_eq!(stored(&data).as_array().unwrap().len(), 1);
}

#[test]
fn corrupted_data_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("library_data.json");
    std::fs::write(&data, "this is not json").unwrap();

    let output = run_with_data(&data, "4\n6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No books in the library."));
    assert!(!stdout.contains("this is not json"));
}
