//! CLI integration tests for the callfwd binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn callfwd() -> Command {
    let mut cmd = Command::cargo_bin("callfwd").unwrap();
    // Keep the host environment out of the tests
    cmd.env_remove("CUCM_ADDRESS")
        .env_remove("AXL_USERNAME")
        .env_remove("AXL_PASSWORD")
        .env_remove("CALLFWD_PORT")
        .env_remove("CALLFWD_HOST");
    cmd
}

#[test]
fn help_lists_commands() {
    callfwd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_init_writes_starter_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("callfwd.toml");

    callfwd()
        .args(["config", "init", "--output"])
        .arg(&output)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("[axl]"));
    assert!(content.contains("[mapping]"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("callfwd.toml");
    std::fs::write(&output, "# existing").unwrap();

    callfwd()
        .args(["config", "init", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn serve_refuses_to_start_without_credentials() {
    let dir = tempfile::tempdir().unwrap();

    callfwd()
        .current_dir(dir.path())
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CUCM_ADDRESS"));
}

#[test]
fn serve_is_fatal_when_wsdl_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    callfwd()
        .current_dir(dir.path())
        .arg("serve")
        .env("CUCM_ADDRESS", "cucm.example.invalid")
        .env("AXL_USERNAME", "axluser")
        .env("AXL_PASSWORD", "axlpass")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bootstrap"));
}
