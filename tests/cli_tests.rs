//! Drive the compiled binary through its menu with `HOME` pointed at a
//! temporary directory, so collection files land somewhere disposable.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gradebook(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn data_file(home: &TempDir, name: &str) -> PathBuf {
    home.path().join(".gradebook").join(name)
}

#[test]
fn exit_on_first_prompt() {
    let home = TempDir::new().unwrap();

    gradebook(&home)
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add Student"))
        .stdout(predicate::str::contains("9. Exit"));

    assert!(home.path().join(".gradebook").is_dir());
}

#[test]
fn end_to_end_session_persists_and_reports() {
    let home = TempDir::new().unwrap();

    gradebook(&home)
        .write_stdin(
            "1\ns1@x.com\nSam\n2\nMath101\nT1\n3\n3\ns1@x.com\nMath101\nB\n4\ns1@x.com\n7\ns1@x.com\n9\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("GPA for s1@x.com: 3.00"))
        .stdout(predicate::str::contains(
            "Course: Math101 (T1, 3 credits) - Grade: B",
        ));

    let students: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data_file(&home, "students.json")).unwrap())
            .unwrap();
    assert_eq!(
        students,
        serde_json::json!([{"email": "s1@x.com", "names": "Sam"}])
    );

    let registrations: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(data_file(&home, "registrations.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        registrations,
        serde_json::json!([{"email": "s1@x.com", "course_name": "Math101", "grade": "B"}])
    );
}

#[test]
fn state_carries_over_between_runs() {
    let home = TempDir::new().unwrap();

    gradebook(&home)
        .write_stdin("1\na@x.com\nAda\n1\nb@x.com\nBo\n2\nMath101\nT1\n4\n3\nb@x.com\nMath101\nA\n9\n")
        .assert()
        .success();

    gradebook(&home)
        .write_stdin("5\n6\nA\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Bo <b@x.com> - GPA: 4.00"))
        .stdout(predicate::str::contains("2. Ada <a@x.com> - GPA: 0.00"))
        .stdout(predicate::str::contains("Bo <b@x.com> - Math101 (T1)"));
}

#[test]
fn bad_input_keeps_menu_running() {
    let home = TempDir::new().unwrap();

    gradebook(&home)
        .write_stdin("2\nMath101\nT1\nlots\n8\n1\nx\n7\nnobody@x.com\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Credits must be a positive integer."))
        .stdout(predicate::str::contains("Invalid GPA range. Please enter numbers."))
        .stdout(predicate::str::contains("Student nobody@x.com not found."))
        .stdout(predicate::str::contains("\u{1b}").not());

    assert!(!data_file(&home, "courses.json").exists());
}

#[test]
fn corrupted_collection_fails_startup() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".gradebook");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("courses.json"), "{oops").unwrap();

    gradebook(&home)
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load courses"));
}
