#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! None of these reach the real service: every case fails (or succeeds)
//! before a request would leave the machine, or targets a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs `deepl` with an isolated config directory and no ambient token.
#[allow(deprecated)]
fn deepl(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deepl").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("DEEPL_TOKEN")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translate text with the DeepL API"))
        .stdout(predicate::str::contains("--target-lang"))
        .stdout(predicate::str::contains("--pro"))
        .stdout(predicate::str::contains("glossary-language-pairs"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_token_is_config_error() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .arg("usage")
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("DEEPL_TOKEN"));
}

#[test]
fn test_empty_input_is_rejected_before_sending() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .env("DEEPL_TOKEN", "test-key:fx")
        // Unreachable on purpose: an attempted request would fail differently.
        .args(["--base-url", "http://127.0.0.1:1/v2"])
        .write_stdin("  \n")
        .assert()
        .failure()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("Input text is empty"));
}

#[test]
fn test_identical_languages_rejected() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .env("DEEPL_TOKEN", "test-key:fx")
        .args(["-s", "DE", "-t", "de"])
        .write_stdin("Hallo")
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("identical"));
}

#[test]
fn test_invalid_tag_handling() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["translate", "--tag-handling", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("json"));
}

#[test]
fn test_unreachable_endpoint_is_transport_error() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .env("DEEPL_TOKEN", "test-key:fx")
        .args(["--base-url", "http://127.0.0.1:1/v2", "usage"])
        .assert()
        .failure()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("127.0.0.1:1/v2/usage"));
}

#[test]
fn test_missing_input_file() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .env("DEEPL_TOKEN", "test-key:fx")
        .arg("/nonexistent/input.txt")
        .assert()
        .failure()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Failed to access file"));
}

#[test]
fn test_configure_show_defaults() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current settings"))
        .stdout(predicate::str::contains("EN (default)"))
        .stdout(predicate::str::contains("JA (default)"))
        .stdout(predicate::str::contains("$DEEPL_TOKEN"));
}

#[test]
fn test_malformed_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("deepl-cli");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[deepl\n").unwrap();

    deepl(&home)
        .env("DEEPL_TOKEN", "test-key:fx")
        .arg("usage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_languages_help() {
    let home = TempDir::new().unwrap();
    deepl(&home)
        .args(["languages", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("source"))
        .stdout(predicate::str::contains("target"));
}
