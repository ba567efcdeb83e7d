//! Integration tests for the lsviz CLI

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{run_lsviz, temp_config};

fn lsviz() -> Command {
    let mut cmd = Command::cargo_bin("lsviz").expect("binary should build");
    cmd.env("NO_COLOR", "1").env_remove("LSVIZ_LOG");
    cmd
}

// ============================================================================
// Trace Output Tests
// ============================================================================

#[test]
fn trace_found_stops_at_match() {
    let (stdout, stderr, exit_code) = run_lsviz(&["trace", "--array", "4, 1, 9, 2, 7", "--target", "9"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout, @r"
    Searching for 9 in [4, 1, 9, 2, 7]

    1/3  🟨 4  ⬜ 1  ⬜ 9  ⬜ 2  ⬜ 7
        Step 1: Compare target (9) with arr[0] = 4

    2/3  ⬜ 4  🟨 1  ⬜ 9  ⬜ 2  ⬜ 7
        Step 2: Compare target (9) with arr[1] = 1

    3/3  ⬜ 4  ⬜ 1  🟩 9  ⬜ 2  ⬜ 7
        Step 3: Compare target (9) with arr[2] = 9
        ✔ Target found!

    Found 9 at index 2 after 3 comparisons.
    ");
}

#[test]
fn trace_not_found_ends_with_terminal_step() {
    let (stdout, _stderr, exit_code) = run_lsviz(&["trace", "-a", "1,2,3", "-t", "5"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("3/4"));
    assert!(stdout.contains("4/4  ⬜ 1  ⬜ 2  ⬜ 3\n    ✘ Target not found."));
    assert!(stdout.contains("5 not found after 3 comparisons."));
}

#[test]
fn trace_empty_array_is_valid() {
    lsviz()
        .args(["trace", "--array", "", "--target", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty list)"))
        .stdout(predicate::str::contains("✘ Target not found."))
        .stdout(predicate::str::contains("1 not found after 0 comparisons."));
}

#[test]
fn trace_accepts_negative_numbers() {
    lsviz()
        .args(["trace", "-a", "-3, -7", "-t", "-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found -7 at index 1"));
}

#[test]
fn trace_duplicates_stop_at_first_occurrence() {
    lsviz()
        .args(["trace", "-a", "5,5,5", "-t", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 at index 0 after 1 comparison."))
        .stdout(predicate::str::contains("2/").not());
}

#[test]
fn trace_json_output() {
    let (stdout, _stderr, exit_code) = run_lsviz(&["trace", "-a", "4,1,9", "-t", "1", "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["found"], true);
    assert_eq!(value["request"]["target"], 1);
    let steps = value["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["index"], 1);
    assert_eq!(steps[1]["compared_value"], 1);
    assert_eq!(steps[1]["is_match"], true);
    assert_eq!(steps[1]["is_final"], true);
    assert_eq!(steps[0]["is_final"], false);
}

#[test]
fn trace_json_not_found_step_has_null_value() {
    let (stdout, _stderr, _exit_code) = run_lsviz(&["trace", "-a", "2", "-t", "3", "--json"]);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let last = &value["steps"][1];
    assert_eq!(last["index"], 1);
    assert!(last["compared_value"].is_null());
    assert_eq!(value["found"], false);
}

#[test]
fn trace_animate_prints_every_frame() {
    lsviz()
        .args(["trace", "-a", "4,1,9,2,7", "-t", "9", "--animate", "--interval-ms", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3"))
        .stdout(predicate::str::contains("3/3"))
        .stdout(predicate::str::contains("Found 9 at index 2"));
}

// ============================================================================
// Validation Error Tests
// ============================================================================

#[test]
fn non_integer_element_is_reported_verbatim() {
    let (stdout, stderr, exit_code) = run_lsviz(&["trace", "-a", "a,b", "-t", "1"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Your list must contain only integers."));
}

#[test]
fn empty_target_is_reported() {
    lsviz()
        .args(["trace", "-a", "1,2", "-t", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Target is required."));
}

#[test]
fn oversized_integer_is_reported_as_out_of_range() {
    lsviz()
        .args(["trace", "-a", "1, 99999999999999999999", "-t", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Integers must be between -9223372036854775808 and 9223372036854775807.",
        ))
        .stderr(predicate::str::contains("only integers").not());
}

#[test]
fn non_integer_target_is_reported() {
    lsviz()
        .args(["trace", "-a", "1,2", "-t", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Target must be an integer."));
}

#[test]
fn missing_arguments_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_lsviz(&["trace"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_honors_override() {
    let (_dir, path) = temp_config("");
    let (stdout, _stderr, exit_code) =
        run_lsviz(&["config", "path", "--config", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), path.display().to_string());
}

#[test]
fn config_show_prints_effective_values() {
    let (_dir, path) = temp_config("[playback]\ninterval_ms = 300\n");

    lsviz()
        .args(["config", "show", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval_ms = 300"))
        .stdout(predicate::str::contains("autoplay = false"))
        .stdout(predicate::str::contains("theme = \"default\""));
}

#[test]
fn invalid_config_fails_trace() {
    let (_dir, path) = temp_config("[playback\n");

    lsviz()
        .args(["trace", "-a", "1", "-t", "1", "--config", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[cfg(unix)]
#[test]
fn trace_animate_stops_on_interrupt() {
    use std::io::{BufRead, BufReader};
    use std::process::{Command as StdCommand, Stdio};

    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_lsviz"))
        .args(["trace", "-a", "1,2,3,4,5,6,7,8", "-t", "0", "--animate", "--interval-ms", "1000"])
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn lsviz");

    // The first frame is printed after the Ctrl-C handler is installed
    let mut stdout = BufReader::new(child.stdout.take().expect("piped stdout"));
    let mut line = String::new();
    while !line.starts_with("1/9") {
        line.clear();
        assert!(stdout.read_line(&mut line).expect("read stdout") > 0, "no frame printed");
    }

    let status = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    let mut rest = String::new();
    std::io::Read::read_to_string(&mut stdout, &mut rest).expect("read stdout");
    let output = child.wait_with_output().expect("wait for lsviz");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("Stopped at step 1/9."), "stderr: {}", stderr);
    assert!(!rest.contains("not found after"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn log_file_receives_debug_events() {
    let dir = tempfile::TempDir::new().unwrap();
    let log = dir.path().join("lsviz.log");

    lsviz()
        .env("LSVIZ_LOG", "debug")
        .args(["trace", "-a", "4,1,9", "-t", "9", "--log-file", log.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("generated search trace").not());

    let content = std::fs::read_to_string(&log).expect("log file should exist");
    assert!(content.contains("generated search trace"));
    assert!(!content.contains("\x1b["));
}

#[test]
fn log_file_is_created_at_default_level() {
    let dir = tempfile::TempDir::new().unwrap();
    let log = dir.path().join("quiet.log");

    lsviz()
        .args(["trace", "-a", "1", "-t", "1", "--log-file", log.to_str().unwrap()])
        .assert()
        .success();

    assert!(log.exists());
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn completions_generate_script() {
    lsviz()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lsviz"));
}

#[test]
fn version_flag() {
    lsviz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("lsviz {}", env!("CARGO_PKG_VERSION"))));
}
