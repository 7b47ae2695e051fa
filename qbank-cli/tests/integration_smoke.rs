//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("qbank").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("qbank").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Port to listen on"))
        .stdout(predicate::str::contains("--mongodb-uri"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("qbank").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Per-operation database timeout"));
}

#[test]
fn test_seed_without_uri_fails() {
    let tmp = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("qbank").unwrap();
    cmd.current_dir(tmp)
        .env_remove("MONGODB_URI")
        .env_remove("EXPO_PUBLIC_MONGODB_URI")
        .arg("seed");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("MONGODB_URI not set"));
}

#[test]
fn test_invalid_port_rejected() {
    let mut cmd = Command::cargo_bin("qbank").unwrap();
    cmd.arg("serve").arg("--port").arg("not-a-port");

    cmd.assert().failure();
}
