#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use studytracker::LogRecord;

pub fn stt() -> Command {
    cargo_bin_cmd!("studytracker")
}

/// Create a unique storage file path inside the system temp dir and remove any existing file
pub fn setup_test_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studytracker.csv", name));
    let file_path = path.to_string_lossy().to_string();
    fs::remove_file(&file_path).ok();
    file_path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn log(d: &str, subject: &str, hours: f64, description: &str) -> LogRecord {
    LogRecord::new(date(d), subject, hours, description)
}

/// Initialize the storage file and add a small dataset via the CLI
pub fn init_file_with_data(file_path: &str) {
    stt()
        .args(["--file", file_path, "--test", "init"])
        .assert()
        .success();

    for (d, subject, hours) in [
        ("2025-09-01", "Math", "2.0"),
        ("2025-09-02", "Math", "1.5"),
        ("2025-09-03", "Art", "3"),
    ] {
        stt()
            .args(["--file", file_path, "add", d, "--subject", subject, "--hours", hours])
            .assert()
            .success();
    }
}
