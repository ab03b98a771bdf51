//! Integration tests for stdin parsing, file input, report output, and exit
//! codes.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn enum_name_map_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_enum-name-map"))
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(enum_name_map_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run enum-name-map");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for output")
}

#[test]
fn test_aliases_grouped_under_base_at_depth_two() {
    let output = run_with_stdin(&["2"], "RED = 0,\nGREEN = 1,\nCRIMSON = RED,\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\t\t{RED, \"RED (aka CRIMSON)\"},\n\t\t{GREEN, \"GREEN\"},\n"
    );
}

#[test]
fn test_no_trailing_comma_at_depth_zero() {
    let output = run_with_stdin(&["0"], "BLUE = 5");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{BLUE, \"BLUE\"},\n");
}

#[test]
fn test_undefined_base_aborts_without_output() {
    let output = run_with_stdin(&["0"], "X = UNDEFINED_BASE\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UNDEFINED_BASE"), "stderr: {stderr}");
}

#[test]
fn test_empty_input_emits_nothing_and_succeeds() {
    let output = run_with_stdin(&["4"], "");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_depth_argument_fails() {
    let output = Command::new(enum_name_map_bin())
        .stdin(Stdio::null())
        .output()
        .expect("failed to run enum-name-map");

    assert!(!output.status.success());
}

#[test]
fn test_non_integer_depth_fails() {
    // Argument parsing fails before stdin is read, so don't pipe input.
    let output = Command::new(enum_name_map_bin())
        .arg("two")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run enum-name-map");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_name_argument_is_accepted_and_ignored() {
    let with_name = run_with_stdin(&["1", "mapColorToString"], "RED = 0,\n");
    let without_name = run_with_stdin(&["1"], "RED = 0,\n");

    assert!(with_name.status.success());
    assert_eq!(with_name.stdout, without_name.stdout);
}

#[test]
fn test_lines_without_assignment_are_ignored() {
    let input = "typedef enum Color {\nRED = 0,\n} Color;\n";
    let output = run_with_stdin(&["0"], input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{RED, \"RED\"},\n");
}

#[test]
fn test_input_flag_reads_from_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("colors.txt");
    std::fs::write(&path, "RED = 0,\nCRIMSON = RED,\n").expect("failed to write fixture");

    let output = Command::new(enum_name_map_bin())
        .args(["1", "--input"])
        .arg(&path)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run enum-name-map");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\t{RED, \"RED (aka CRIMSON)\"},\n"
    );
}

#[test]
fn test_input_flag_missing_file_fails() {
    let output = Command::new(enum_name_map_bin())
        .args(["1", "--input", "no-such-file.txt"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run enum-name-map");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-file.txt"), "stderr: {stderr}");
}

#[test]
fn test_report_flag_keeps_stdout_table_and_emits_json_to_stderr() {
    let output = run_with_stdin(&["0", "--report"], "noise\nRED = 0,\nCRIMSON = RED,\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{RED, \"RED (aka CRIMSON)\"},\n"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    let report: serde_json::Value = serde_json::from_str(&stderr)
        .unwrap_or_else(|e| panic!("Invalid JSON report: {e}\n{stderr}"));
    assert_eq!(report["total_lines"], 3);
    assert_eq!(report["skipped_lines"], 1);
    assert_eq!(report["base_lines"], 1);
    assert_eq!(report["alias_lines"], 1);
}
