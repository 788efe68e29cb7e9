use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_sloc"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sloc"))
        .stdout(predicate::str::contains("--count-unterminated"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_sloc"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_zero_jobs() {
    Command::new(env!("CARGO_BIN_EXE_sloc"))
        .args(["--jobs", "0", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--jobs"));
}

#[test]
fn rejects_unknown_format() {
    Command::new(env!("CARGO_BIN_EXE_sloc"))
        .args(["--format", "yaml"])
        .assert()
        .failure();
}
