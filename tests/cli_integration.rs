#![cfg(feature = "cli")]

use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_anydiff").to_string()
}

#[test]
fn cli_prints_script_and_distance() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    std::fs::write(&old, b"abcdefg").unwrap();
    std::fs::write(&new, b"abXceZg").unwrap();

    let out = Command::new(bin())
        .args(["--mode", "bytes"])
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "==+=-=-+=\ndistance: 4\n"
    );
}

#[test]
fn cli_identical_files_exit_zero() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    std::fs::write(&old, "line 1\nline 2\n").unwrap();
    std::fs::write(&new, "LINE 1\nline 2\n").unwrap();

    let st = Command::new(bin())
        .arg("--ignore-case")
        .arg(&old)
        .arg(&new)
        .status()
        .unwrap();
    assert_eq!(st.code(), Some(0));
}

#[test]
fn cli_json_summary() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    std::fs::write(&old, "line 1\nline 2\nline 3\nline 4\n").unwrap();
    std::fs::write(&new, "line 1\nline 2 mod\nline 3\nline 5\n").unwrap();

    let out = Command::new(bin())
        .arg("--json")
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["script"], "=-+=-+");
    assert_eq!(value["distance"], 4);
}

#[test]
fn cli_missing_input_is_trouble() {
    let dir = tempdir().unwrap();
    let existing = dir.path().join("present.txt");
    std::fs::write(&existing, "x").unwrap();

    let out = Command::new(bin())
        .arg(dir.path().join("missing.txt"))
        .arg(&existing)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(!out.stderr.is_empty());
}

#[test]
fn cli_rejects_trim_outside_line_mode() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    std::fs::write(&old, " a ").unwrap();
    std::fs::write(&new, "a").unwrap();

    let out = Command::new(bin())
        .args(["--mode", "chars", "--trim"])
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--trim"));
    assert!(out.stdout.is_empty());
}
