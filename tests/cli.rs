use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn prints_script_from_stdin() {
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .write_stdin("Demo/\n├── README.md\n└── src/\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("set ROOT=Demo"))
        .stdout(predicate::str::contains("type nul > %ROOT%\\README.md"))
        .stdout(predicate::str::contains("mkdir %ROOT%\\src"));
}

#[test]
fn writes_bat_file_to_output_dir() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tree.txt");
    fs::write(&input, "Demo/\n└── notes.txt\n").unwrap();
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--no-pause")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo.bat"));
    let script = fs::read_to_string(dir.path().join("Demo.bat")).unwrap();
    assert!(script.contains("type nul > %ROOT%\\notes.txt"));
    assert!(!script.contains("pause"));
}

#[test]
fn reports_missing_root() {
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .write_stdin("main.py\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not detect a root folder"));
}

#[test]
fn reports_empty_input() {
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .write_stdin("\n   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please paste or upload"));
}

#[test]
fn output_dir_rejects_format_flags() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .write_stdin("Demo/\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    assert!(!dir.path().join("Demo.bat").exists());
}

#[test]
fn output_dir_rejects_path_like_root() {
    let base = tempdir().unwrap();
    let out = base.path().join("out");
    fs::create_dir(&out).unwrap();
    Command::cargo_bin("treebat")
        .expect("binary exists")
        .arg("-o")
        .arg(&out)
        .write_stdin("../escaped/\na.txt\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used as a script file name"));
    assert!(!base.path().join("escaped.bat").exists());
}
