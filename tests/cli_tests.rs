//! Binary-level CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_shows_usage() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"))
        .stdout(predicate::str::contains("--no-sound"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodorino"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodorino"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.args(["completions", "notashell"]).assert().failure();
}

#[test]
fn test_unknown_flag_fails() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.arg("--definitely-not-a-flag").assert().failure();
}

#[test]
fn test_quit_command_exits_cleanly() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.arg("--no-sound")
        .write_stdin("q\n")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success();
}

#[test]
fn test_json_mode_emits_initial_events() {
    let mut cmd = Command::cargo_bin("pomodorino").unwrap();
    cmd.args(["--no-sound", "--json"])
        .write_stdin("q\n")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""event":"phase_changed""#))
        .stdout(predicate::str::contains(r#""time":"25:00""#));
}
