//! Integration tests for the `wyzely` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! config handling, and error paths — all without touching the Wyze cloud.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `wyzely` binary with env isolation.
///
/// Clears all `WYZE_*` env vars and points config/data directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn wyzely_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wyzely");
    cmd.env("HOME", "/tmp/wyzely-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/wyzely-cli-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/wyzely-cli-test-nonexistent")
        .env_remove("WYZE_HOME")
        .env_remove("WYZE_USERNAME")
        .env_remove("WYZE_PASSWORD_HASH")
        .env_remove("WYZE_KEY_ID")
        .env_remove("WYZE_API_KEY")
        .env_remove("WYZE_OUTPUT")
        .env_remove("WYZE_TIMEOUT");
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
    let output = wyzely_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    wyzely_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Wyze")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("groups"))
            .and(predicate::str::contains("thumbnails")),
    );
}

#[test]
fn test_version_flag() {
    wyzely_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wyzely"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    wyzely_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    wyzely_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    wyzely_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = wyzely_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_devices_list_without_credentials() {
    wyzely_cmd()
        .args(["devices", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("credential"));
}

#[test]
fn test_invalid_output_format() {
    let output = wyzely_cmd()
        .args(["--output", "invalid", "devices", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing credentials, not about argument parsing.
    wyzely_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--timeout",
            "60",
            "devices",
            "list",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("credential"));
}

#[test]
fn test_properties_set_requires_assignments() {
    let output = wyzely_cmd()
        .args(["properties", "set", "desk-lamp"])
        .output()
        .unwrap();
    assert_eq!(
        output.status.code(),
        Some(2),
        "Expected usage error for missing --set"
    );
}

// ── Offline commands ────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    // `config show` renders the defaults even when no config file exists.
    wyzely_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_config_path_prints_location() {
    wyzely_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_then_show_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();

    let mut set = wyzely_cmd();
    set.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .args(["config", "set", "username", "stef@example.com"]);
    set.assert().success();

    let mut show = wyzely_cmd();
    show.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .args(["config", "show"]);
    show.assert()
        .success()
        .stdout(predicate::str::contains("stef@example.com"));
}

#[test]
fn test_config_set_unknown_key() {
    let output = wyzely_cmd()
        .args(["config", "set", "nonsense", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("unknown config key"),
        "Expected unknown-key error:\n{text}"
    );
}

#[test]
fn test_config_set_validates_output_format() {
    let output = wyzely_cmd()
        .args(["config", "set", "output", "xml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

#[test]
fn test_auth_status_without_config() {
    // Status inspects the local token cache only; no credentials needed.
    wyzely_cmd()
        .args(["--output", "plain", "auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("absent"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_devices_subcommands_exist() {
    wyzely_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list").and(predicate::str::contains("get")));
}

#[test]
fn test_groups_subcommands_exist() {
    wyzely_cmd()
        .args(["groups", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("devices")),
        );
}

#[test]
fn test_properties_subcommands_exist() {
    wyzely_cmd()
        .args(["properties", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("get").and(predicate::str::contains("set")));
}

#[test]
fn test_thumbnails_fetch_flags_exist() {
    wyzely_cmd()
        .args(["thumbnails", "fetch", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--since")
                .and(predicate::str::contains("--until"))
                .and(predicate::str::contains("--count"))
                .and(predicate::str::contains("--dir")),
        );
}

#[test]
fn test_auth_subcommands_exist() {
    wyzely_cmd()
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status").and(predicate::str::contains("login")));
}

#[test]
fn test_config_subcommands_exist() {
    wyzely_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("path")),
        );
}
