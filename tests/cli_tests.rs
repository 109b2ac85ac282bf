// tests/cli_tests.rs

mod common;

use assert_cmd::Command;
use common::{write_raw, TestConfigBuilder};
use predicates::prelude::*;

fn varify_config() -> Command {
    let mut cmd = Command::cargo_bin("varify-config").unwrap();
    cmd.env_remove("VARIFY_CONFIG")
        .env_remove("VARIFY_JSON_LOGS")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_check_valid_config() {
    let (_dir, path) = TestConfigBuilder::new().with_mysql().write();

    varify_config()
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_check_reports_missing_field() {
    let (_dir, path) = TestConfigBuilder::new().without("redis", Some("host")).write();

    varify_config()
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("redis.host"));
}

#[test]
fn test_check_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();

    varify_config()
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_check_invalid_json() {
    let (_dir, path) = write_raw("{ not json");

    varify_config()
        .arg("--config")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn test_show_masks_secrets() {
    let (_dir, path) = TestConfigBuilder::new().with_mysql().write();

    let output = varify_config()
        .env("VARIFY_CONFIG", &path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code_prefix\": \"code_\""))
        .stdout(predicate::str::contains("smtp-app-password").not())
        .stdout(predicate::str::contains("redis-password").not())
        .stdout(predicate::str::contains("mysql").not())
        .get_output()
        .stdout
        .clone();

    let view: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(view["email_user"], "verify@example.com");
    assert_eq!(view["email_pass"], "smtp****");
    assert_eq!(view["redis_port"], 6379);
}
