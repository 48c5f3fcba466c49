//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--image-policy"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--reset"));
}

#[test]
fn test_config_path_respects_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blogly.toml");

    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.env("BLOGLY_CONFIG", &path).arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("blogly.toml"));
}

#[test]
fn test_config_show_layers_file_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[avatar]\npolicy = \"required\"\n").unwrap();

    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.current_dir(dir.path())
        .env("BLOGLY_CONFIG", &path)
        .env("DATABASE_URL", "postgres://localhost/blogly_test")
        .env_remove("BLOGLY_IMAGE_POLICY")
        .arg("config")
        .arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("policy = \"required\""))
        .stdout(predicate::str::contains("postgres://localhost/blogly_test"));
}

#[test]
fn test_invalid_image_policy_rejected() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("serve").arg("--image-policy").arg("sometimes");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown image policy"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("blogly"));
}
