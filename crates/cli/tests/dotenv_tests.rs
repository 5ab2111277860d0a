//! Integration tests for dotenv handling in the `xiang` binary.
//!
//! Responsibilities:
//! - Prove that `.env` in the working directory is detected and its mode applied.
//! - Prove that `--env-file` / `XIANG_ENV_FILE` select another file.
//! - Prove that malformed files are reported without leaking their contents
//!   and without aborting startup.
//!
//! Invariants:
//! - Tests must explicitly clear `DOTENV_DISABLED` to enable detection.
//! - Tests use temp directories and set current_dir to isolate `.env` file effects.

mod common;

use common::{parse_show, xiang_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn detecting_cmd(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = xiang_cmd();
    cmd.current_dir(dir);
    cmd.env_remove("DOTENV_DISABLED");
    cmd
}

#[test]
fn test_dotenv_in_working_directory_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "XIANG_MODE=development\nXIANG_SESSION_PORT=4000\n",
    )
    .unwrap();

    let output = detecting_cmd(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config = parse_show(&output);
    assert_eq!(config["mode"], "development");
    assert_eq!(config["session"]["port"], 4000);
}

#[test]
fn test_dotenv_value_wins_over_process_environment() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "XIANG_SERVICE_HOST=10.1.1.1\n").unwrap();

    let output = detecting_cmd(temp_dir.path())
        .env("XIANG_SERVICE_HOST", "10.2.2.2")
        .arg("show")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_show(&output)["service"]["host"], "10.1.1.1");
}

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "XIANG_SESSION_PORT=4000\n").unwrap();

    let output = xiang_cmd()
        .current_dir(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_show(&output)["session"]["port"], 3322);
}

#[test]
fn test_development_dotenv_opens_log_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "XIANG_MODE=development\nXIANG_LOG=./logs/app.log\n",
    )
    .unwrap();

    detecting_cmd(temp_dir.path()).arg("check").assert().success();
    detecting_cmd(temp_dir.path()).arg("check").assert().success();

    let log = fs::read_to_string(temp_dir.path().join("logs").join("app.log")).unwrap();
    assert_eq!(
        log.matches("Run mode applied").count(),
        2,
        "second run should append, not truncate: {log}"
    );
}

#[test]
fn test_json_log_mode_writes_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "XIANG_MODE=development\nXIANG_LOG=app.log\nXIANG_LOG_MODE=JSON\n",
    )
    .unwrap();

    detecting_cmd(temp_dir.path()).arg("check").assert().success();

    let log = fs::read_to_string(temp_dir.path().join("app.log")).unwrap();
    let lines: Vec<serde_json::Value> = log
        .lines()
        .map(|line| serde_json::from_str(line).expect("every log line should be JSON"))
        .collect();
    assert!(
        lines
            .iter()
            .any(|line| line["fields"]["message"] == "Run mode applied"),
        "log: {log}"
    );
}

#[test]
fn test_env_file_flag_selects_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "XIANG_SESSION_PORT=4000\n").unwrap();
    fs::write(temp_dir.path().join("other.env"), "XIANG_SESSION_PORT=4001\n").unwrap();

    let output = detecting_cmd(temp_dir.path())
        .args(["--env-file", "other.env", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_show(&output)["session"]["port"], 4001);
}

#[test]
fn test_env_file_variable_selects_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deploy.env");
    fs::write(&path, "XIANG_MODE=development\n").unwrap();

    let output = xiang_cmd()
        .env("XIANG_ENV_FILE", &path)
        .arg("show")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(parse_show(&output)["mode"], "development");
}

#[test]
fn test_missing_env_file_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();

    xiang_cmd()
        .current_dir(temp_dir.path())
        .args(["--env-file", "absent.env", "check"])
        .assert()
        .success();
}

#[test]
fn test_malformed_dotenv_is_reported_without_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let secret_value = "supersecret_xiang_token_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("_XIANG_TEST_TOKEN={secret_value}\nINVALID_LINE"),
    )
    .unwrap();

    detecting_cmd(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Can't load env file"))
        .stderr(predicate::str::contains(secret_value).not())
        .stdout(predicate::str::contains(secret_value).not());
}
