//! CLI integration tests for ctxsum

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ctxsum() -> Command {
    Command::cargo_bin("ctxsum").unwrap()
}

#[test]
fn test_hash_prints_default_length() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    ctxsum()
        .arg("hash")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{12}\n$").unwrap());
}

#[test]
fn test_hash_full_prints_sixty_four_chars() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    ctxsum()
        .arg("hash")
        .arg(temp.path())
        .arg("--full")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{64}\n$").unwrap());
}

#[test]
fn test_hash_is_stable_across_invocations() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.py"), "print('hi')").unwrap();

    let first = ctxsum().arg("hash").arg(temp.path()).output().unwrap();
    let second = ctxsum().arg("hash").arg(temp.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_files_lists_sorted_paths() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("zz.txt"), "z").unwrap();
    fs::write(temp.path().join("aa.txt"), "a").unwrap();

    ctxsum()
        .arg("files")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("aa.txt\nzz.txt\n");
}

#[test]
fn test_files_respects_ignore_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "*.log\n.dockerignore").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();
    fs::write(temp.path().join("debug.log"), "noise").unwrap();

    ctxsum()
        .arg("files")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("main.go\n");
}

#[test]
fn test_always_include_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "*").unwrap();
    fs::write(temp.path().join("Dockerfile"), "FROM scratch").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    ctxsum()
        .arg("files")
        .arg(temp.path())
        .arg("--always-include")
        .arg("Dockerfile")
        .arg("--always-include")
        .arg(".dockerignore")
        .assert()
        .success()
        .stdout(".dockerignore\nDockerfile\n");
}

#[test]
fn test_hash_json_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    ctxsum()
        .arg("hash")
        .arg(temp.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hash\""));
}

#[test]
fn test_invalid_pattern_fails_with_context() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "broken[\n").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    ctxsum()
        .arg("hash")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated character class"));
}

#[test]
fn test_missing_root_fails() {
    ctxsum()
        .arg("hash")
        .arg("/definitely/not/a/real/context")
        .assert()
        .failure()
        .stderr(predicate::str::contains("context root not found"));
}
