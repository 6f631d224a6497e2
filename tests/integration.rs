// Integration tests for the observatory CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and argument validation.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the observatory binary.
fn observatory() -> Command {
    Command::cargo_bin("observatory").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    observatory()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("observatory"));
}

#[test]
fn cli_help_flag() {
    observatory()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("African energy modelling"));
}

#[test]
fn summary_requires_path() {
    observatory()
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn country_requires_iso_code() {
    observatory()
        .args(["country", "/tmp/data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    observatory()
        .args(["summary", "/tmp/data", "--quiet", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_data_dir_exits_with_runtime_failure() {
    let dir = tempfile::TempDir::new().expect("temp dir should be created");
    let missing = dir.path().join("nope");
    observatory()
        .arg("summary")
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("data directory does not exist"));
}

#[test]
fn recommend_rejects_unknown_budget_value() {
    observatory()
        .args(["recommend", "/tmp/data", "--budget", "infinite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
