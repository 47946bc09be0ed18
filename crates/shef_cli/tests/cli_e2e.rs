//! End-to-end tests for argument handling, fatal errors and output placement.

#![expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]

use std::fs;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shefmine() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shefmine"))
}

fn init_git_repo(dir: &TempDir) {
    for args in [
        &["init", "-q"][..],
        &["config", "user.email", "test@test.com"],
        &["config", "user.name", "Test User"],
        &["config", "commit.gpgsign", "false"],
    ] {
        StdCommand::new("git")
            .args(args)
            .current_dir(dir.path())
            .output()
            .expect("git setup failed");
    }
}

fn commit(dir: &TempDir, file: &str, content: &str, msg: &str) {
    fs::write(dir.path().join(file), content).expect("write failed");

    StdCommand::new("git")
        .args(["add", file])
        .current_dir(dir.path())
        .output()
        .expect("git add failed");

    StdCommand::new("git")
        .args(["commit", "-q", "-m", msg])
        .current_dir(dir.path())
        .output()
        .expect("git commit failed");
}

fn repo_with_fix() -> TempDir {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);
    commit(&dir, "a.txt", "a\n", "Fix XSS in template");
    dir
}

#[test]
fn version_flag_prints_version() {
    shefmine()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shefmine"));
}

#[test]
fn missing_repo_argument_shows_usage() {
    shefmine().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn plain_directory_is_not_a_repository() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let output = out.path().join("out.json");

    shefmine()
        .arg(dir.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a Git repository"));

    assert!(!output.exists());
}

#[test]
fn unknown_branch_is_a_bad_revision() {
    let dir = repo_with_fix();
    let out = TempDir::new().unwrap();
    let output = out.path().join("out.json");

    shefmine()
        .arg(dir.path())
        .args(["-b", "no-such-branch", "-o"])
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad revision 'no-such-branch'"));

    assert!(!output.exists());
}

#[test]
fn unknown_single_commit_is_a_bad_revision() {
    let dir = repo_with_fix();
    let out = TempDir::new().unwrap();

    shefmine()
        .arg(dir.path())
        .args(["-s", "0123456789abcdef0123456789abcdef01234567", "-o"])
        .arg(out.path().join("out.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad revision"));
}

#[test]
fn invalid_config_aborts_before_mining() {
    let dir = repo_with_fix();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "disabled_categories = [\"Not A Category\"]\n").expect("write failed");
    let out = TempDir::new().unwrap();
    let output = out.path().join("out.json");

    shefmine()
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not A Category"));

    assert!(!output.exists());
}

#[test]
fn unknown_scanner_is_rejected_by_argument_parsing() {
    shefmine()
        .args([".", "--scanner", "lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lint"));
}

#[test]
fn non_json_extension_is_rewritten() {
    let dir = repo_with_fix();
    let out = TempDir::new().unwrap();

    shefmine()
        .arg(dir.path())
        .arg("-o")
        .arg(out.path().join("result.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Output file extension has been automatically changed to .json",
        ));

    assert!(out.path().join("result.json").exists());
    assert!(!out.path().join("result.txt").exists());
}

#[test]
fn output_without_extension_is_a_directory() {
    let dir = repo_with_fix();
    let out = TempDir::new().unwrap();
    let target = out.path().join("reports");

    shefmine().arg(dir.path()).arg("-o").arg(&target).assert().success();

    assert!(target.join("output.json").is_file());
}

#[test]
fn output_with_trailing_separator_is_a_directory() {
    let dir = repo_with_fix();
    let out = TempDir::new().unwrap();
    let target = format!("{}/reports.v2/", out.path().display());

    shefmine()
        .arg(dir.path())
        .args(["-o", &target])
        .assert()
        .success()
        .stderr(predicate::str::contains("automatically changed").not());

    assert!(out.path().join("reports.v2").join("output.json").is_file());
    assert!(!out.path().join("reports.json").exists());
}

#[test]
fn default_output_lands_in_working_directory() {
    let dir = repo_with_fix();
    let cwd = TempDir::new().unwrap();

    shefmine().arg(dir.path()).current_dir(cwd.path()).assert().success();

    assert!(cwd.path().join("output.json").is_file());
}

#[test]
fn summary_is_printed_on_stdout() {
    let dir = repo_with_fix();
    let out = TempDir::new().unwrap();

    shefmine()
        .arg(dir.path())
        .arg("-o")
        .arg(out.path().join("out.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues found    : 1"))
        .stdout(predicate::str::contains("Output location : "))
        .stdout(predicate::str::contains("out.json"))
        .stdout(predicate::str::contains("Time taken      : "))
        .stdout(predicate::str::contains(" seconds"));
}

#[test]
fn config_file_is_read_from_working_directory() {
    let dir = repo_with_fix();
    let cwd = TempDir::new().unwrap();
    fs::write(
        cwd.path().join(".shefmine.toml"),
        "disabled_categories = [\"Cross-Site Scripting\"]\n",
    )
    .expect("write failed");

    shefmine()
        .arg(dir.path())
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues found    : 0"));

    assert_eq!(
        fs::read_to_string(cwd.path().join("output.json")).expect("report missing"),
        "{}"
    );
}
