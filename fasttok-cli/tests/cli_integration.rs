//! Integration tests for the fasttok CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fasttok() -> Command {
    Command::cargo_bin("fasttok").unwrap()
}

#[test]
fn test_default_mode_normalizes_and_segments() {
    fasttok()
        .arg("-q")
        .write_stdin("Hello, ｗｏｒｌｄ!\nThe ﬁrst test.\n")
        .assert()
        .success()
        .stdout("Hello , world !\nThe first test .\n");
}

#[test]
fn test_protected_dash_split() {
    fasttok()
        .args(["-q", "-p"])
        .write_stdin("A state-of-the-art model.\n")
        .assert()
        .success()
        .stdout("A state @-@ of @-@ the @-@ art model .\n");
}

#[test]
fn test_protected_span_passes_through() {
    fasttok()
        .args(["-q", "-p", "-s"])
        .write_stdin("Visit \u{1F}http://a.b/c-d\u{1F} today!\n")
        .assert()
        .success()
        .stdout("Visit http://a.b/c-d today !\n");
}

#[test]
fn test_norm_only() {
    fasttok()
        .args(["-q", "-n"])
        .write_stdin("ｆｕｌｌ-width, ﬁne.\n")
        .assert()
        .success()
        .stdout("full-width, fine.\n");
}

#[test]
fn test_segm_only_keeps_compatibility_forms() {
    fasttok()
        .args(["-q", "-s"])
        .write_stdin("ﬁne, thanks\n")
        .assert()
        .success()
        .stdout("ﬁne , thanks\n");
}

#[test]
fn test_desegment() {
    fasttok()
        .args(["-q", "-d"])
        .write_stdin("He said \" it 's a state @-@ of @-@ the @-@ art ( new ) model \" .\n")
        .assert()
        .success()
        .stdout("He said \"it 's a state-of-the-art (new) model\".\n");
}

#[test]
fn test_round_trip_with_markers() {
    let segmented = fasttok()
        .args(["-q", "-p"])
        .write_stdin("Prices rose 5% (a well-known trend).\n")
        .output()
        .unwrap();
    assert!(segmented.status.success());

    fasttok()
        .args(["-q", "-d"])
        .write_stdin(segmented.stdout)
        .assert()
        .success()
        .stdout("Prices rose 5% (a well-known trend).\n");
}

#[test]
fn test_line_count_and_order_preserved() {
    let input: String = (0..2500).map(|i| format!("Line {i}, ok.\n")).collect();
    let expected: String = (0..2500).map(|i| format!("Line {i} , ok .\n")).collect();

    let output = fasttok()
        .args(["-q", "-j", "3", "--chunk-size", "7", "--max-in-flight", "2"])
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_empty_and_blank_lines() {
    fasttok()
        .arg("-q")
        .write_stdin("\n  \nx\n")
        .assert()
        .success()
        .stdout("\n\nx\n");

    fasttok().arg("-q").write_stdin("").assert().success().stdout("");
}

#[test]
fn test_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "Read from a file!").unwrap();

    fasttok()
        .args(["-q", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Read from a file !\n");
}

#[test]
fn test_missing_input_file() {
    fasttok()
        .args(["-q", "-i", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_conflicting_mode_flags() {
    fasttok()
        .args(["-n", "-s"])
        .write_stdin("x\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("norm_only and segm_only"));
}

#[test]
fn test_non_positive_thread_count() {
    for value in ["0", "-1"] {
        fasttok()
            .args(["-j", value])
            .write_stdin("x\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Number of threads must be positive"));
    }
}

#[test]
fn test_statistics_on_stderr() {
    fasttok()
        .args(["-s", "-j", "2"])
        .write_stdin("a b\nc d\n")
        .assert()
        .success()
        .stdout("a b\nc d\n")
        .stderr(predicate::str::contains("Num threads: 2"))
        .stderr(predicate::str::contains("2 Done!"))
        .stderr(predicate::str::contains("Time taken:"))
        .stderr(predicate::str::contains("Num lines: 2"))
        .stderr(predicate::str::contains("lines/s"));
}

#[test]
fn test_quiet_suppresses_stderr() {
    fasttok()
        .args(["-q", "-s"])
        .write_stdin("a b\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fasttok.toml");
    fs::write(
        &path,
        "[processing]\nprotected_dash_split = true\n\n[performance]\nnum_threads = 2\n",
    )
    .unwrap();

    fasttok()
        .args(["-s", "-c"])
        .arg(&path)
        .write_stdin("x-y\n")
        .assert()
        .success()
        .stdout("x @-@ y\n")
        .stderr(predicate::str::contains("Num threads: 2"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[performance\n").unwrap();

    fasttok()
        .args(["-q", "-c"])
        .arg(&path)
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_malformed_utf8_line() {
    fasttok()
        .args(["-s"])
        .write_stdin(b"ok\nbad\xFF\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok\nbad"))
        .stderr(predicate::str::contains("invalid UTF-8"));
}
