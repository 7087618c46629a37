use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, ends_with};
use std::fs;

mod common;
use common::{init_file_with_data, setup_test_file, stt};

#[test]
fn test_init_creates_header_only_file() {
    let file = setup_test_file("cli_init");

    stt()
        .args(["--file", &file, "--test", "init"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Date,Subject,Duration,Description\n"
    );
}

#[test]
fn test_list_shows_all_logs() {
    let file = setup_test_file("cli_list");
    init_file_with_data(&file);

    stt()
        .args(["--file", &file, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"))
        .stdout(contains("Art"));
}

#[test]
fn test_list_filter() {
    let file = setup_test_file("cli_list_filter");
    init_file_with_data(&file);

    stt()
        .args(["--file", &file, "list", "--filter", "art"])
        .assert()
        .success()
        .stdout(contains("2025-09-03"))
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_summary() {
    let file = setup_test_file("cli_summary");
    init_file_with_data(&file);

    stt()
        .args(["--file", &file, "summary"])
        .assert()
        .success()
        .stdout(contains("Art").and(contains("3.00 hours")))
        .stdout(contains("Math").and(contains("3.50 hours")))
        .stdout(ends_with("hours\n"));
}

#[test]
fn test_summary_empty() {
    let file = setup_test_file("cli_summary_empty");

    stt()
        .args(["--file", &file, "summary"])
        .assert()
        .success()
        .stdout(contains("No logs to summarize."));
}

#[test]
fn test_add_rejects_invalid_input() {
    let file = setup_test_file("cli_add_invalid");

    stt()
        .args(["--file", &file, "add", "2025-09-01", "--subject", "  ", "--hours", "1"])
        .assert()
        .failure()
        .stderr(contains("Subject cannot be empty"));

    stt()
        .args(["--file", &file, "add", "2025-09-01", "--subject", "Math", "--hours", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    stt()
        .args(["--file", &file, "add", "2025/09/01", "--subject", "Math", "--hours", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert!(!std::path::Path::new(&file).exists());
}

#[test]
fn test_edit_keeps_unspecified_fields() {
    let file = setup_test_file("cli_edit");
    init_file_with_data(&file);

    stt()
        .args(["--file", &file, "edit", "2", "--hours", "4.25"])
        .assert()
        .success()
        .stdout(contains("Log #2 updated."));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("\"2025-09-02\",\"Math\",\"4.25\",\"\""));
    assert!(content.contains("\"2025-09-01\",\"Math\",\"2.0\",\"\""));
}

#[test]
fn test_edit_unknown_id_is_noop() {
    let file = setup_test_file("cli_edit_unknown");
    init_file_with_data(&file);
    let before = fs::read_to_string(&file).unwrap();

    for id in ["0", "9"] {
        stt()
            .args(["--file", &file, "edit", id, "--subject", "Other"])
            .assert()
            .success()
            .stdout(contains("nothing changed"));
    }

    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn test_del_with_confirmation_flag() {
    let file = setup_test_file("cli_del");
    init_file_with_data(&file);

    stt()
        .args(["--file", &file, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Log #1 has been deleted."));

    let content = fs::read_to_string(&file).unwrap();
    assert!(!content.contains("2025-09-01"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_del_cancelled_keeps_log() {
    let file = setup_test_file("cli_del_cancel");
    init_file_with_data(&file);

    stt()
        .args(["--file", &file, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert!(fs::read_to_string(&file).unwrap().contains("2025-09-01"));
}
