//! CLI smoke tests
//!
//! Checks the binary surface without starting an interactive session.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_chat_command() {
    Command::cargo_bin("studyhall")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("studyhall")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studyhall"));
}

#[test]
fn test_chat_help_shows_overrides() {
    Command::cargo_bin("studyhall")
        .unwrap()
        .args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--user-id"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("studyhall")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

#[test]
fn test_missing_subcommand_fails() {
    Command::cargo_bin("studyhall")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
