//! Error scenario integration tests

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn toastmaker_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_toastmaker"))
}

/// Binary with its config directory pointed at `dir`
fn isolated_bin(dir: &std::path::Path) -> Command {
    let mut cmd = toastmaker_bin();
    cmd.env("HOME", dir).env("XDG_CONFIG_HOME", dir);
    cmd
}

#[test]
fn missing_markup_file_is_usage_error() {
    let output = toastmaker_bin()
        .args(["xml", "/nonexistent/toast.xml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Expected missing file error, got: {}",
        stderr
    );
}

#[test]
fn markup_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    toastmaker_bin()
        .arg("xml")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a file"));
}

#[test]
fn empty_title_is_rejected() {
    toastmaker_bin()
        .args(["text", "-t", "", "-b", "World"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn missing_body_is_rejected() {
    toastmaker_bin()
        .args(["render", "-t", "Hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--body"));
}

#[test]
fn broken_config_reports_module_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("toastmaker");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "app_name = [").unwrap();

    isolated_bin(dir.path())
        .args(["text", "-t", "Hello", "-b", "World"])
        .assert()
        .code(1)
        .stdout(predicate::str::diff("4001\n"))
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn config_get_unknown_key() {
    let output = toastmaker_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key") || stderr.contains("Valid keys"),
        "Expected unknown key error, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let dir = tempfile::tempdir().unwrap();

    isolated_bin(dir.path())
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_boolean() {
    let dir = tempfile::tempdir().unwrap();

    isolated_bin(dir.path())
        .args(["config", "set", "debug", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'true' or 'false'"));
}

#[test]
fn config_list_without_file_shows_unset_values() {
    let dir = tempfile::tempdir().unwrap();

    isolated_bin(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn unknown_command_is_usage_error() {
    toastmaker_bin().arg("bogus").assert().code(2);
}
