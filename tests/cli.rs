//! CLI integration tests
//!
//! Runs the compiled binary and checks argument handling and the info
//! command. Server startup itself is covered by the web integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn pdfsmith() -> Command {
    let mut cmd = Command::cargo_bin("pdfsmith").unwrap();
    // Keep ambient env vars from leaking into config resolution
    cmd.env_remove("PDFSMITH_BIND")
        .env_remove("PDFSMITH_PORT")
        .env_remove("PDFSMITH_PDF_PATH")
        .env_remove("PDFSMITH_PDF_URL")
        .env_remove("PDFSMITH_BODY_LIMIT");
    cmd
}

// TC-BIN-001: Help lists the subcommands
#[test]
fn test_help_lists_subcommands() {
    pdfsmith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("info"));
}

// TC-BIN-002: Version flag prints the crate version
#[test]
fn test_version_flag() {
    pdfsmith()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// TC-BIN-003: Info command reports the effective configuration
#[test]
fn test_info_command() {
    pdfsmith()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdfsmith v"))
        .stdout(predicate::str::contains("Config File Locations"))
        .stdout(predicate::str::contains("Effective Configuration"))
        .stdout(predicate::str::contains("Port:"))
        .stdout(predicate::str::contains("Backing File:"));
}

// TC-BIN-004: Unknown subcommand is rejected
#[test]
fn test_unknown_subcommand() {
    pdfsmith()
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// TC-BIN-005: Serve help shows the config flags
#[test]
fn test_serve_help_shows_flags() {
    pdfsmith()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pdf-path"))
        .stdout(predicate::str::contains("--pdf-url"))
        .stdout(predicate::str::contains("--body-limit"))
        .stdout(predicate::str::contains("--config"));
}

// TC-BIN-006: Unreadable explicit config file exits with the config error code
#[test]
fn test_serve_bad_config_exits_with_config_error() {
    pdfsmith()
        .args(["serve", "--config", "/nonexistent/pdfsmith.toml"])
        .assert()
        .failure()
        .code(pdfsmith::exit_codes::CONFIG_ERROR)
        .stderr(predicate::str::contains("Failed to load config file"));
}

// TC-BIN-007: Out-of-range port is rejected during parsing
#[test]
fn test_serve_invalid_port() {
    pdfsmith()
        .args(["serve", "--port", "99999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// TC-BIN-008: PDFSMITH_* variables reach the effective configuration
#[test]
fn test_info_reflects_env_overrides() {
    pdfsmith()
        .env("PDFSMITH_PORT", "7777")
        .env("PDFSMITH_PDF_URL", "https://files.internal/env.pdf")
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Port:       7777"))
        .stdout(predicate::str::contains("https://files.internal/env.pdf"));
}
