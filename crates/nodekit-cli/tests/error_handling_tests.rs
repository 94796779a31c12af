//! Exit codes and messages for failing runs.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn nodekit(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("nodekit");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), "{}").unwrap();
    tmp
}

#[test]
fn missing_manifest_exits_4_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();

    nodekit(tmp.path())
        .args(["setup", "--yes", "--skip-install"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("package.json"))
        .stderr(predicate::str::contains("npm init"));

    assert!(!tmp.path().join(".env").exists());
}

#[test]
fn invalid_manifest_exits_4() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), "{ not json").unwrap();

    nodekit(tmp.path())
        .args(["setup", "--yes", "--skip-install"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn incompatible_answers_exit_2() {
    let tmp = project();

    nodekit(tmp.path())
        .args(["setup", "-f", "express", "-d", "mongodb", "-o", "prisma", "--skip-install"])
        .assert()
        .code(2);

    assert!(!tmp.path().join(".env").exists());
}

#[test]
fn unknown_flag_value_exits_2() {
    let tmp = project();

    nodekit(tmp.path())
        .args(["setup", "--framework", "koa"])
        .assert()
        .code(2);
}

#[test]
fn missing_directory_exits_3() {
    let tmp = TempDir::new().unwrap();

    nodekit(tmp.path())
        .args(["setup", "--yes", "--dir", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn piped_stdin_without_answers_exits_2() {
    let tmp = project();

    nodekit(tmp.path())
        .args(["setup", "--skip-install"])
        .write_stdin("")
        .assert()
        .code(2);

    assert!(!tmp.path().join(".env").exists());
}

#[cfg(unix)]
#[test]
fn failed_install_is_reported_and_exits_0_keeping_files() {
    let tmp = project();

    nodekit(tmp.path())
        .env("PATH", "")
        .args(["setup", "-f", "express", "-d", "none", "-o", "none"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("yarn add express"))
        .stderr(predicate::str::contains("--skip-install"));

    assert!(tmp.path().join(".env").exists());
}

#[test]
fn bad_config_default_exits_4() {
    let tmp = project();
    fs::write(
        tmp.path().join(".nodekit.toml"),
        "[defaults]\norm = \"drizzle\"\n",
    )
    .unwrap();

    nodekit(tmp.path())
        .args(["setup", "--yes", "--skip-install"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.orm"));
}

#[test]
fn explicit_missing_config_file_exits_4() {
    let tmp = project();

    nodekit(tmp.path())
        .args(["--config", "nope.toml", "choices"])
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_exits_4() {
    let tmp = TempDir::new().unwrap();

    nodekit(tmp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
