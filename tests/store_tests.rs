mod common;
use common::{log, setup_test_file};
use std::fs;
use studytracker::{LogStore, Mutation};

fn sample_store(name: &str) -> LogStore {
    let path = setup_test_file(name);
    let mut store = LogStore::open(&path);
    store.add(log("2025-01-10", "Math", 2.0, "Algebra")).unwrap();
    store.add(log("2025-01-08", "Physics", 1.25, "")).unwrap();
    store.add(log("2025-01-12", "Art", 3.0, "Sketching")).unwrap();
    store
}

#[test]
fn test_missing_file_gives_empty_store() {
    let path = setup_test_file("store_missing");
    let store = LogStore::open(&path);
    assert!(store.is_empty());
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_add_appends_and_persists() {
    let path = setup_test_file("store_add");
    let mut store = LogStore::open(&path);
    let r = log("2025-02-01", "Chemistry", 0.5, "Titration");

    store.add(r.clone()).unwrap();

    assert_eq!(store.list().last(), Some(&r));
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Date,Subject,Duration,Description\n\"2025-02-01\",\"Chemistry\",\"0.5\",\"Titration\"\n"
    );
}

#[test]
fn test_add_keeps_insertion_order() {
    let store = sample_store("store_order");
    let subjects: Vec<&str> = store.list().iter().map(|l| l.subject.as_str()).collect();
    assert_eq!(subjects, ["Math", "Physics", "Art"]);
}

#[test]
fn test_update_replaces_only_target() {
    let mut store = sample_store("store_update");
    let before = store.list().to_vec();
    let r2 = log("2025-01-09", "Biology", 4.0, "Cells");

    assert_eq!(store.update(1, r2.clone()).unwrap(), Mutation::Applied);

    assert_eq!(store.list()[1], r2);
    assert_eq!(store.list()[0], before[0]);
    assert_eq!(store.list()[2], before[2]);

    let reloaded = LogStore::open(store.path());
    assert_eq!(reloaded.list(), store.list());
}

#[test]
fn test_out_of_range_is_noop() {
    let path = setup_test_file("store_out_of_range");
    let mut store = LogStore::open(&path);
    store.add(log("2025-01-10", "Math", 2.0, "")).unwrap();
    let before = store.list().to_vec();
    let file_before = fs::read_to_string(&path).unwrap();

    let r = log("2025-01-11", "Other", 1.0, "");
    assert_eq!(store.update(1, r.clone()).unwrap(), Mutation::OutOfRange);
    assert_eq!(store.update(usize::MAX, r).unwrap(), Mutation::OutOfRange);
    assert_eq!(store.delete(1).unwrap(), Mutation::OutOfRange);
    assert_eq!(store.delete(42).unwrap(), Mutation::OutOfRange);

    assert_eq!(store.list(), before.as_slice());
    assert_eq!(fs::read_to_string(&path).unwrap(), file_before);
}

#[test]
fn test_delete_shifts_later_positions() {
    let mut store = sample_store("store_delete");
    let before = store.list().to_vec();

    assert!(store.delete(0).unwrap().applied());

    assert_eq!(store.len(), before.len() - 1);
    assert_eq!(store.list(), &before[1..]);

    let reloaded = LogStore::open(store.path());
    assert_eq!(reloaded.list(), &before[1..]);
}

#[test]
fn test_round_trip_preserves_content_and_order() {
    let store = sample_store("store_round_trip");
    let reloaded = LogStore::open(store.path());
    assert_eq!(reloaded.list(), store.list());
}

#[test]
fn test_round_trip_comma_in_description() {
    let path = setup_test_file("store_comma");
    let mut store = LogStore::open(&path);
    let r = log("2025-03-01", "History", 1.5, "Chapters 1, 2, 3");
    store.add(r.clone()).unwrap();

    let reloaded = LogStore::open(&path);
    assert_eq!(reloaded.list(), [r]);
}

#[test]
fn test_round_trip_escaped_quote_in_subject() {
    let path = setup_test_file("store_quote");
    let mut store = LogStore::open(&path);
    let r = log("2025-03-02", "Intro to \"AI\"", 2.0, "said \"hello\", then left");
    store.add(r.clone()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"Intro to \"\"AI\"\"\""));

    let reloaded = LogStore::open(&path);
    assert_eq!(reloaded.list(), [r]);
}

#[test]
fn test_round_trip_newline_in_description() {
    let path = setup_test_file("store_newline");
    let mut store = LogStore::open(&path);
    let r = log("2025-03-03", "Writing", 0.75, "line one\nline two");
    store.add(r.clone()).unwrap();

    let reloaded = LogStore::open(&path);
    assert_eq!(reloaded.list(), [r]);
}

#[test]
fn test_write_failure_keeps_memory() {
    // A directory cannot be opened as a file for writing.
    let dir = std::env::temp_dir();
    let mut store = LogStore::open(&dir);
    assert!(store.is_empty());

    let r = log("2025-03-04", "Math", 1.0, "");
    assert!(store.add(r.clone()).is_err());
    assert_eq!(store.list(), [r]);
}
