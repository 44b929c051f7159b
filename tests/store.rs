use std::fs;

use tempfile::tempdir;

use termtrivia::store::{FileStore, ScoreStore};

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::at(dir.path().join("highScore"))
}

#[test]
fn absent_file_reads_as_none() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.read_best(), None);
}

#[test]
fn write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let mut store = store_in(&dir);

    store.write_best(7).unwrap();
    assert_eq!(store.read_best(), Some(7));
}

#[test]
fn write_overwrites_unconditionally() {
    let dir = tempdir().unwrap();
    let mut store = store_in(&dir);

    store.write_best(5).unwrap();
    store.write_best(2).unwrap();
    // The store enforces no monotonicity; that invariant lives in the
    // session.
    assert_eq!(store.read_best(), Some(2));
}

#[test]
fn stored_format_is_a_base10_string() {
    let dir = tempdir().unwrap();
    let mut store = store_in(&dir);

    store.write_best(42).unwrap();
    let content = fs::read_to_string(dir.path().join("highScore")).unwrap();
    assert_eq!(content, "42");
}

#[test]
fn garbage_content_reads_as_none() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("highScore"), "not a number").unwrap();

    let store = store_in(&dir);
    assert_eq!(store.read_best(), None);
}

#[test]
fn whitespace_around_value_is_tolerated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("highScore"), "9\n").unwrap();

    let store = store_in(&dir);
    assert_eq!(store.read_best(), Some(9));
}

#[test]
fn clear_removes_the_value() {
    let dir = tempdir().unwrap();
    let mut store = store_in(&dir);

    store.write_best(3).unwrap();
    store.clear().unwrap();
    assert_eq!(store.read_best(), None);

    // Clearing an already-empty store is fine.
    store.clear().unwrap();
}
