#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EMPTY_NOTICE: &str = "Список студентов пустой.";

fn students_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("students"));
    cmd.env_remove("DATA").env_remove("RUST_LOG");
    cmd
}

fn write_roster(path: &Path, json: &str) {
    fs::write(path, json).unwrap();
}

#[test]
fn missing_data_path_exits_with_status_one() {
    let temp = TempDir::new().unwrap();

    students_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The data file name is absent"));
}

#[test]
fn empty_data_env_counts_as_missing() {
    students_cmd()
        .env("DATA", "")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The data file name is absent"));
}

#[test]
fn list_on_missing_file_prints_empty_notice() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("missing.json");

    students_cmd()
        .args(["--data", data.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(EMPTY_NOTICE))
        .stdout(predicate::str::contains("+---").not());

    assert!(!data.exists(), "list must not create the data file");
}

#[test]
fn add_creates_file_and_list_shows_it() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    students_cmd()
        .env("DATA", &data)
        .args(["add", "-n", "Ivanov I.I.", "-g", "101", "-m", "5"])
        .assert()
        .success();

    let raw = fs::read_to_string(&data).unwrap();
    assert_eq!(
        raw,
        "[\n    {\n        \"name\": \"Ivanov I.I.\",\n        \"group\": 101,\n        \"mark\": 5\n    }\n]"
    );

    students_cmd()
        .env("DATA", &data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "|    1 | Ivanov I.I.                    | 101            |",
        ))
        .stdout(predicate::str::contains("Ф.И.О."));
}

#[test]
fn data_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let from_env = temp.path().join("env.json");
    let from_flag = temp.path().join("flag.json");

    students_cmd()
        .env("DATA", &from_env)
        .args(["add", "-n", "A", "-m", "3", "-d", from_flag.to_str().unwrap()])
        .assert()
        .success();

    assert!(from_flag.exists());
    assert!(!from_env.exists());
}

#[test]
fn add_without_group_stores_null_and_keeps_unicode() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    students_cmd()
        .args(["-d", data.to_str().unwrap(), "add", "-n", "Петров П.П.", "-m", "4"])
        .assert()
        .success();

    let raw = fs::read_to_string(&data).unwrap();
    assert!(raw.contains("\"name\": \"Петров П.П.\""));
    assert!(raw.contains("\"group\": null"));
}

#[test]
fn repeated_adds_keep_insertion_order() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    for (name, mark) in [("C", "5"), ("A", "2"), ("B", "4")] {
        students_cmd()
            .env("DATA", &data)
            .args(["add", "-n", name, "-m", mark])
            .assert()
            .success();
    }

    let output = students_cmd()
        .env("DATA", &data)
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let c = stdout.find("| C ").unwrap();
    let a = stdout.find("| A ").unwrap();
    let b = stdout.find("| B ").unwrap();
    assert!(c < a && a < b);
}

#[test]
fn filter_shows_only_marks_above_four() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");
    write_roster(
        &data,
        r#"[{"name":"A","group":1,"mark":3},{"name":"B","group":2,"mark":5}]"#,
    );

    students_cmd()
        .env("DATA", &data)
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "|    1 | B                              | 2              |",
        ))
        .stdout(predicate::str::contains("| A ").not());

    // read-only commands leave the file untouched
    assert_eq!(
        fs::read_to_string(&data).unwrap(),
        r#"[{"name":"A","group":1,"mark":3},{"name":"B","group":2,"mark":5}]"#
    );
}

#[test]
fn filter_on_empty_roster_prints_notice_once() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    let output = students_cmd()
        .env("DATA", &data)
        .arg("filter")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches(EMPTY_NOTICE).count(), 1);
}

#[test]
fn filter_without_matches_prints_notice() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");
    write_roster(&data, r#"[{"name":"A","group":1,"mark":4}]"#);

    students_cmd()
        .env("DATA", &data)
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains(EMPTY_NOTICE));
}

#[test]
fn malformed_json_fails_and_add_does_not_overwrite() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");
    write_roster(&data, "not json at all");

    students_cmd()
        .env("DATA", &data)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));

    students_cmd()
        .env("DATA", &data)
        .args(["add", "-n", "A", "-m", "5"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&data).unwrap(), "not json at all");
}

#[test]
fn add_without_mark_is_an_argument_error() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    students_cmd()
        .env("DATA", &data)
        .args(["add", "-n", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mark"));

    assert!(!data.exists());
}

#[test]
fn version_flag_prints_version() {
    students_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "students {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    students_cmd()
        .env("DATA", &data)
        .args(["-v", "add", "-n", "A", "-m", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("saved 1 students"))
        .stdout(predicate::str::contains("saved 1 students").not());
}

#[test]
fn bare_invocation_is_an_argument_error() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("students.json");

    students_cmd()
        .args(["-d", data.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(EMPTY_NOTICE).not());

    students_cmd()
        .args(["-d", data.to_str().unwrap(), "ls"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));

    assert!(!data.exists());
}
