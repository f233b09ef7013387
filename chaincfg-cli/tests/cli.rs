//! Integration tests for the chaincfg CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chaincfg"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Assemble and check smart-contract toolchain configuration",
        ));
}

/// Test that every subcommand is listed in help.
#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");

    cmd.arg("--help");

    cmd.assert().success().stdout(
        predicate::str::contains("show")
            .and(predicate::str::contains("check"))
            .and(predicate::str::contains("networks"))
            .and(predicate::str::contains("vars"))
            .and(predicate::str::contains("completions")),
    );
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that completions are generated for bash.
#[test]
fn test_cli_completions_bash() {
    let mut cmd = Command::cargo_bin("chaincfg").expect("Failed to find chaincfg binary");

    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chaincfg"));
}
