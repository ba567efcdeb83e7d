//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use lsviz::{generate, PlaybackController, SearchRequest, StepSequence};
use tempfile::TempDir;

/// Run the lsviz binary with colors disabled and capture its output.
pub fn run_lsviz(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_lsviz"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("LSVIZ_LOG")
        .output()
        .expect("Failed to execute lsviz");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to a config file inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

pub fn sequence(array: &[i64], target: i64) -> StepSequence {
    generate(&SearchRequest::new(array.to_vec(), target))
}

pub fn loaded_controller(array: &[i64], target: i64) -> PlaybackController {
    let mut controller = PlaybackController::new();
    controller.load(sequence(array, target));
    controller
}
