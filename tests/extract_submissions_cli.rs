use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_gradebook(dir: &Path, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join("gradebook.zip");
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (name, content) in files {
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}

fn extract_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("extract-submissions").unwrap();
    cmd.current_dir(cwd).arg("--no-progress");
    cmd
}

#[test]
fn test_late_submission_end_to_end() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[("HW1_abc123_attempt_2024-01-10-23-59-59.pdf", b"%PDF-1.4 report")],
    );

    extract_cmd(work.path())
        .arg(&zip_path)
        .args(["--deadline", "2024-01-10:23:00"])
        .assert()
        .success();

    assert_eq!(
        fs::read(work.path().join("hw1/abc123/pdf")).unwrap(),
        b"%PDF-1.4 report"
    );
    assert_eq!(
        fs::read_to_string(work.path().join("late.txt")).unwrap(),
        "abc123: 59m 59s\n"
    );
}

#[test]
fn test_no_deadline_means_no_late_file() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[("HW1_abc123_attempt_2024-01-10-23-59-59.pdf", b"%PDF-1.4 report")],
    );

    extract_cmd(work.path()).arg(&zip_path).assert().success();

    assert!(work.path().join("hw1/abc123/pdf").is_file());
    assert!(!work.path().join("late.txt").exists());
}

#[test]
fn test_on_time_submission_writes_no_late_file() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[("HW1_abc123_attempt_2024-01-10-23-00-00_main.c", b"int main;")],
    );

    extract_cmd(work.path())
        .arg(&zip_path)
        .args(["--deadline", "2024-01-10:23:00", "--latefile", "hw1-late.txt"])
        .assert()
        .success();

    assert!(work.path().join("hw1/abc123/main.c").is_file());
    assert!(!work.path().join("hw1-late.txt").exists());
}

#[test]
fn test_custom_latefile_and_verbose_summary() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[
            ("Lab 1_ab12_attempt_2024-02-02-10-00-00_lab.py", b"print(1)"),
            ("Lab 1_sc21xy_attempt_2024-02-01-09-00-00_lab.py", b"print(2)"),
            ("Lab 1_sc21xy_attempt_2024-02-01-09-00-00.txt", b"receipt"),
        ],
    );

    extract_cmd(work.path())
        .arg(&zip_path)
        .args(["--deadline", "2024-02-01:12:00", "--latefile", "lab1-late.txt", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 submitters, 3 files extracted"))
        .stdout(predicate::str::contains("1 late submitters:"))
        .stdout(predicate::str::contains("ab12: 22h 0m 0s"));

    assert_eq!(
        fs::read_to_string(work.path().join("lab1-late.txt")).unwrap(),
        "ab12: 22h 0m 0s\n"
    );
    assert!(work.path().join("lab_1/sc21xy/txt").is_file());
}

#[test]
fn test_non_submission_members_are_skipped() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[
            ("README.txt", b"instructions"),
            ("HW1_abc123_2024-01-10-23-59-59.pdf", b"no attempt marker"),
        ],
    );

    extract_cmd(work.path()).arg(&zip_path).assert().success();

    let mut entries: Vec<_> = fs::read_dir(work.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["gradebook.zip"]);
}

#[test]
fn test_rerun_gives_same_tree() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[
            ("HW1_abc123_attempt_2024-01-10-23-59-59_a.txt", b"one"),
            ("HW1_def456_attempt_2024-01-10-20-00-00_b.txt", b"two"),
        ],
    );

    extract_cmd(work.path()).arg(&zip_path).assert().success();
    extract_cmd(work.path()).arg(&zip_path).assert().success();

    assert_eq!(fs::read_dir(work.path().join("hw1")).unwrap().count(), 2);
    assert_eq!(fs::read_dir(work.path().join("hw1/abc123")).unwrap().count(), 1);
    assert_eq!(
        fs::read_to_string(work.path().join("hw1/def456/b.txt")).unwrap(),
        "two"
    );
}

#[test]
fn test_missing_archive_fails() {
    let work = TempDir::new().unwrap();

    extract_cmd(work.path())
        .arg("missing.zip")
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("missing.zip"));
}

#[test]
fn test_malformed_deadline_fails_before_extracting() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[("HW1_abc123_attempt_2024-01-10-23-59-59.pdf", b"report")],
    );

    extract_cmd(work.path())
        .arg(&zip_path)
        .args(["--deadline", "10/01/2024 23:00"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Error: Invalid deadline"));

    assert!(!work.path().join("hw1").exists());
}

#[test]
fn test_usage_error_and_bad_archive_exit_differently() {
    let work = TempDir::new().unwrap();

    extract_cmd(work.path())
        .args(["missing.zip", "--bogus"])
        .assert()
        .failure()
        .code(2);

    extract_cmd(work.path())
        .arg("missing.zip")
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_verbose_error_is_a_single_line() {
    let work = TempDir::new().unwrap();

    let output = extract_cmd(work.path())
        .args(["missing.zip", "-v"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(6));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("(suggestion: "));
}

#[test]
fn test_write_failure_stops_run_without_late_file() {
    let work = TempDir::new().unwrap();
    let zip_path = create_gradebook(
        work.path(),
        &[
            ("HW1_aa_attempt_2024-01-10-23-59-59.pdf", b"first"),
            ("HW1_bb_attempt_2024-01-10-23-59-59.pdf", b"second"),
        ],
    );
    fs::create_dir_all(work.path().join("hw1")).unwrap();
    fs::write(work.path().join("hw1/bb"), b"in the way").unwrap();

    let output = extract_cmd(work.path())
        .arg(&zip_path)
        .args(["--deadline", "2024-01-10:23:00"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: Failed to write"), "stderr was: {stderr}");
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");

    assert!(work.path().join("hw1/aa/pdf").is_file());
    assert!(!work.path().join("late.txt").exists());
}
