//! End-to-end tests driving the `ascii-draw` binary with piped input.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ascii_draw(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ascii-draw").expect("binary built");
    // keep tests away from any real user config
    cmd.arg("--config").arg(temp_dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_piped_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let expected = [
        " --------------------",
        "|oooooooooooooooxxxxx|",
        "|xxxxxxooooooooox   x|",
        "|     xoooooooooxxxxx|",
        "|     xoooooooooooooo|",
        " --------------------",
    ]
    .join("\n");

    ascii_draw(&temp_dir)
        .write_stdin("C 20 4\nL 1 2 6 2\nL 6 3 6 4\nR 16 1 20 3\nB 10 3 o\nQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected))
        .stdout(predicate::str::ends_with("Quitting.\n"));
}

#[test]
fn test_errors_are_reported_not_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    ascii_draw(&temp_dir)
        .write_stdin("L 1 1 1 1\nC 3 3\nL 1 1 3 3\nR 1 1 4 4\nS\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No canvas"))
        .stdout(predicate::str::contains("diagonal line"))
        .stdout(predicate::str::contains("exceeds canvas bounds"))
        .stdout(predicate::str::ends_with(" ---\n|   |\n|   |\n|   |\n ---\n"));
}

#[test]
fn test_script_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = temp_dir.path().join("draw.txt");
    fs::write(&script, "C 4 2\nL 1 1 3 1\n").expect("write script");

    ascii_draw(&temp_dir)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" ----\n|xxx |\n|    |\n ----\n"));
}

#[test]
fn test_config_limits_canvas_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), "max_cells = 4\n").expect("write config");

    ascii_draw(&temp_dir)
        .write_stdin("C 3 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds the limit of 4 cells"));
}

#[test]
fn test_broken_config_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), "prompt = [").expect("write config");

    ascii_draw(&temp_dir)
        .write_stdin("Q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_missing_script_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    ascii_draw(&temp_dir)
        .arg("--script")
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure();
}
