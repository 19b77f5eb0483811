//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trackwise").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_serve_help_mentions_database_url() {
    let mut cmd = Command::cargo_bin("trackwise").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

// === Hash-Password Command Tests ===

#[test]
fn test_hash_password_help() {
    let mut cmd = Command::cargo_bin("trackwise").unwrap();
    cmd.arg("hash-password").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Password to hash"));
}

#[test]
fn test_hash_password_emits_phc_string() {
    let mut cmd = Command::cargo_bin("trackwise").unwrap();
    cmd.arg("hash-password").arg("hunter2");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("$argon2"));
}

// === Top-Level Tests ===

#[test]
fn test_top_level_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("trackwise").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("hash-password"));
}
