//! Integration tests for context fingerprinting

use ctxsum::{CtxsumError, Fingerprinter, FULL_HEX_LEN};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_no_ignore_file_hashes_everything() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    let hash = Fingerprinter::new(temp.path()).hash().unwrap();
    assert_eq!(hash.len(), 12);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_negation_reincludes_go_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "*\n!**/*.go").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();
    fs::write(temp.path().join("README.md"), "# readme").unwrap();

    let files = Fingerprinter::new(temp.path()).files().unwrap();
    assert_eq!(files, vec!["main.go"]);
}

#[test]
fn test_directory_rule_prunes_subtree() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "vendor/").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();
    fs::create_dir_all(temp.path().join("vendor/dep")).unwrap();
    fs::write(temp.path().join("vendor/dep/dep.go"), "package dep").unwrap();

    let files = Fingerprinter::new(temp.path())
        .ignore_file(".dockerignore")
        .files()
        .unwrap();
    assert_eq!(files, vec![".dockerignore", "main.go"]);
}

#[test]
fn test_character_class_patterns() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "*.[oa]\n.dockerignore").unwrap();
    fs::write(temp.path().join("main.o"), "obj").unwrap();
    fs::write(temp.path().join("lib.a"), "lib").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    let files = Fingerprinter::new(temp.path()).files().unwrap();
    assert_eq!(files, vec!["main.go"]);
}

#[test]
fn test_always_include_survives_blanket_exclusion() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "*").unwrap();
    fs::write(temp.path().join("Dockerfile"), "FROM scratch").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    let files = Fingerprinter::new(temp.path())
        .always_include(["Dockerfile", ".dockerignore"])
        .files()
        .unwrap();
    assert_eq!(files, vec![".dockerignore", "Dockerfile"]);
}

#[test]
fn test_truncation_zero_returns_full_digest() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    let hash = Fingerprinter::new(temp.path())
        .truncate_len(0)
        .hash()
        .unwrap();
    assert_eq!(hash.len(), FULL_HEX_LEN);
}

#[test]
fn test_repeated_calls_are_identical() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "*.log\n!keep.log").unwrap();
    fs::write(temp.path().join("app.py"), "print('hi')").unwrap();
    fs::write(temp.path().join("keep.log"), "kept").unwrap();
    fs::write(temp.path().join("drop.log"), "dropped").unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/app.py"), "print('deep')").unwrap();

    let fp = Fingerprinter::new(temp.path());
    let first = fp.hash().unwrap();
    for _ in 0..5 {
        assert_eq!(first, fp.hash().unwrap());
    }
}

#[test]
fn test_identical_trees_match_across_roots() {
    // Two separately created trees with the same relative content agree,
    // whatever order the filesystem happened to materialize them in
    let build = |temp: &TempDir, order: &[&str]| {
        for name in order {
            fs::write(temp.path().join(name), format!("content of {name}")).unwrap();
        }
        Fingerprinter::new(temp.path()).hash().unwrap()
    };

    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();
    let hash_a = build(&temp_a, &["a.txt", "b.txt", "c.txt"]);
    let hash_b = build(&temp_b, &["c.txt", "a.txt", "b.txt"]);
    assert_eq!(hash_a, hash_b);
}

#[test]
fn test_rename_changes_hash() {
    let temp_a = TempDir::new().unwrap();
    fs::write(temp_a.path().join("foo.go"), "package main").unwrap();

    let temp_b = TempDir::new().unwrap();
    fs::write(temp_b.path().join("bar.go"), "package main").unwrap();

    let hash_a = Fingerprinter::new(temp_a.path()).hash().unwrap();
    let hash_b = Fingerprinter::new(temp_b.path()).hash().unwrap();
    assert_ne!(hash_a, hash_b);
}

#[test]
fn test_invalid_pattern_aborts_before_walk() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "ok\nbroken[\n").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();

    let err = Fingerprinter::new(temp.path()).hash().unwrap_err();
    match err {
        CtxsumError::Pattern { line, .. } => assert_eq!(line, 2),
        other => panic!("expected pattern error, got {other:?}"),
    }
}

#[test]
fn test_custom_ignore_file_name() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".ctxignore"), "*.md\n.ctxignore").unwrap();
    fs::write(temp.path().join("main.go"), "package main").unwrap();
    fs::write(temp.path().join("README.md"), "# readme").unwrap();

    let files = Fingerprinter::new(temp.path())
        .ignore_file(".ctxignore")
        .files()
        .unwrap();
    assert_eq!(files, vec!["main.go"]);
}

#[test]
fn test_anchored_pattern_only_matches_root() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".dockerignore"), "/config.yml\n.dockerignore").unwrap();
    fs::write(temp.path().join("config.yml"), "root: true").unwrap();
    fs::create_dir(temp.path().join("env")).unwrap();
    fs::write(temp.path().join("env/config.yml"), "root: false").unwrap();

    let files = Fingerprinter::new(temp.path()).files().unwrap();
    assert_eq!(files, vec!["env/config.yml"]);
}

#[test]
fn test_deep_negation_descends_excluded_tree() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".dockerignore"),
        "node_modules/\n!node_modules/kept/LICENSE\n.dockerignore",
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("node_modules/kept")).unwrap();
    fs::create_dir_all(temp.path().join("node_modules/dropped")).unwrap();
    fs::write(temp.path().join("node_modules/kept/LICENSE"), "MIT").unwrap();
    fs::write(temp.path().join("node_modules/dropped/index.js"), "x").unwrap();

    let files = Fingerprinter::new(temp.path()).files().unwrap();
    assert_eq!(files, vec!["node_modules/kept/LICENSE"]);
}
