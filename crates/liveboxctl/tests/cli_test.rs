//! Integration tests for the `lbx` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and configuration errors, all without a set-top box on the network.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `lbx` binary with env isolation.
///
/// Clears all `LIVEBOX_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn lbx_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("lbx");
    cmd.env("HOME", "/tmp/lbx-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/lbx-cli-test-nonexistent")
        .env_remove("LIVEBOX_HOST")
        .env_remove("LIVEBOX_HOSTNAME")
        .env_remove("LIVEBOX_PORT")
        .env_remove("LIVEBOX_OUTPUT")
        .env_remove("LIVEBOX_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = lbx_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    lbx_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("set-top box")
            .and(predicate::str::contains("channel"))
            .and(predicate::str::contains("status")),
    );
}

#[test]
fn test_version_flag() {
    lbx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lbx"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    lbx_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    lbx_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = lbx_cmd().arg("frobnicate").output().unwrap();
    assert!(!output.status.success(), "Expected failure for invalid subcommand");
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("frobnicate"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_missing_hostname_is_a_usage_error() {
    let output = lbx_cmd().arg("state").output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("hostname") || text.contains("LIVEBOX_HOST"),
        "Expected hint about the missing hostname:\n{text}"
    );
}

#[test]
fn test_key_requires_an_argument() {
    lbx_cmd().arg("key").assert().failure();
}

#[test]
fn test_op_rejects_non_numeric_codes() {
    let output = lbx_cmd()
        .args(["-H", "livebox.lan", "op", "xyz"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("two-digit"),
        "Expected validation message:\n{text}"
    );
}
