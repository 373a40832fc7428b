use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("treecat"));
}

#[test]
fn requires_an_output_path() {
    Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg(".")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out"));
}

#[test]
fn consolidates_a_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    fs::write(temp.path().join("hello.txt"), "hello").unwrap();
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("snapshot.txt");

    Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--out")
        .arg(&output)
        .arg("--flat")
        .arg(temp.path())
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("1 file(s) written"));

    let body = fs::read_to_string(&output).unwrap();
    assert!(body.contains("==================== hello.txt ===================="));
    assert!(body.contains("hello\n"));
}

#[test]
fn rejects_flat_marker_outside_directory_list() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = temp.path().join("snapshot.txt");

    Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--out")
        .arg(&output)
        .arg("--flat")
        .arg(temp.path().join("elsewhere"))
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--flat"));
}

#[test]
fn warns_and_continues_past_a_missing_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    fs::write(temp.path().join("kept.txt"), "kept").unwrap();
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("snapshot.txt");

    Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--out")
        .arg(&output)
        .arg(temp.path().join("does-not-exist"))
        .arg(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn]"));
}

#[test]
fn fails_when_output_cannot_be_created() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = temp.path().join("no-such-dir").join("snapshot.txt");

    Command::new(env!("CARGO_BIN_EXE_treecat"))
        .arg("--out")
        .arg(&output)
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("opening output"));
}
