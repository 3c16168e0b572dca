//! Integration tests for `FileHistoryStore` and `SaveDirectory`.

use std::fs;

use vnengine_core::error::StoreError;
use vnengine_core::persistence::{HistoryStore, SaveSlots};
use vnengine_storage::{FileHistoryStore, SaveDirectory};

// --- load ---

#[test]
fn test_load_missing_file_returns_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("save.txt"));

    let result = store.load();

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[test]
fn test_load_reads_existing_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");
    fs::write(&path, "[0, 3, 7]").unwrap();
    let store = FileHistoryStore::new(&path);

    let history = store.load().unwrap();

    assert_eq!(history, [0, 3, 7]);
}

#[test]
fn test_load_garbage_returns_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");
    fs::write(&path, "not a history").unwrap();
    let store = FileHistoryStore::new(&path);

    let result = store.load();

    assert!(matches!(result, Err(StoreError::Corrupt(_))));
}

// --- save + load ---

#[test]
fn test_save_writes_bracketed_list_and_loads_it_back() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");
    let store = FileHistoryStore::new(&path);

    // Act
    store.save(&[0, 3, 7]).unwrap();

    // Assert
    assert_eq!(fs::read_to_string(&path).unwrap(), "[0, 3, 7]");
    assert_eq!(store.load().unwrap(), [0, 3, 7]);
    assert!(!dir.path().join("save.txt.tmp").exists());
}

#[test]
fn test_save_replaces_previous_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("save.txt"));

    store.save(&[0, 1, 2]).unwrap();
    store.save(&[0, 1]).unwrap();

    assert_eq!(store.load().unwrap(), [0, 1]);
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path().join("nested/deeper/save.txt"));

    store.save(&[0]).unwrap();

    assert_eq!(store.load().unwrap(), [0]);
}

#[test]
fn test_save_into_a_file_path_fails_with_io() {
    // Arrange: the parent "directory" is a regular file.
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let store = FileHistoryStore::new(blocker.join("save.txt"));

    // Act
    let result = store.save(&[0]);

    // Assert
    assert!(matches!(result, Err(StoreError::Io(_))));
}

// --- save slots ---

#[test]
fn test_slots_are_independent_files() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveDirectory::new(dir.path());

    // Act
    saves.open("alice").save(&[0, 2]).unwrap();
    saves.open("bob").save(&[0]).unwrap();

    // Assert
    assert_eq!(saves.open("alice").load().unwrap(), [0, 2]);
    assert_eq!(saves.open("bob").load().unwrap(), [0]);
    assert!(dir.path().join("alice.txt").is_file());
    assert!(matches!(
        saves.open("carol").load(),
        Err(StoreError::NotFound)
    ));
}
