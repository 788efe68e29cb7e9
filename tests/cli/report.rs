use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.c", "int x;\n// note\n\n");
    write(dir.path(), "pkg/lib.go", "package lib\n/* a\nb */\nfunc F() {}\n");
    write(dir.path(), "Makefile", "# build\nall:\n");
    write(dir.path(), "README.md", "not counted\n");
    write(dir.path(), ".hidden/skip.c", "int skipped;\n");
    dir
}

fn sloc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sloc"))
}

#[test]
fn prints_table_in_language_order() {
    let dir = fixture();
    let output = sloc().arg(dir.path()).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "  Language  Files  Code  Comment  Blank  Total");
    assert_eq!(lines[1], "         C      1     1        1      1      3");
    assert_eq!(lines[2], "        Go      1     2        2      0      4");
    assert_eq!(lines[3], "      Make      1     1        1      0      2");
}

#[test]
fn json_output_parses() {
    let dir = fixture();
    let output = sloc()
        .args(["--format", "json", "--total"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["language"], "TOTAL");
    assert_eq!(rows[3]["files"], 3);
    assert_eq!(rows[3]["total"], 9);
}

#[test]
fn hidden_flag_includes_dot_directories() {
    let dir = fixture();
    sloc()
        .args(["--hidden", "--format", "json"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\": 2"));
}

#[test]
fn missing_path_is_reported_but_run_succeeds() {
    let dir = fixture();
    let missing = dir.path().join("nope");
    sloc()
        .arg(&missing)
        .arg(dir.path().join("main.c"))
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("  ! {}", missing.display())))
        .stdout(predicate::str::contains("         C      1"));
}

#[test]
fn unterminated_last_line_is_opt_in() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tail.go", "package main\nfunc main() {}");

    sloc()
        .args(["--format", "json"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 1"));
    sloc()
        .args(["--format", "json", "--count-unterminated"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 2"));
}
