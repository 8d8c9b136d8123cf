//! End-to-end CLI surface tests for the ytcookies binary.
//!
//! These exercise argument handling only; a full run needs a live Chrome
//! instance with remote debugging enabled and is not run in CI.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("ytcookies").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("remote-debugging"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("ytcookies").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ytcookies"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("ytcookies").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that an out-of-range wait is rejected at the argument layer.
#[test]
fn test_binary_wait_out_of_range_rejected() {
    let mut cmd = Command::cargo_bin("ytcookies").unwrap();
    cmd.args(["--wait", "601"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("601"));
}

/// Test that an unparseable target URL fails fast with a clear message,
/// before any browser connection is attempted.
#[test]
fn test_binary_invalid_url_fails_fast() {
    let mut cmd = Command::cargo_bin("ytcookies").unwrap();
    cmd.args(["--url", "not a url", "--wait", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target URL"));
}
