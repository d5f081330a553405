use crate::storage::StorageError;
use crate::{FileStore, KeyValueStore};

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use tempfile::TempDir;

fn temp_store() -> (TempDir, FileStore) {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path().join("nested/storage.json")).unwrap();
    (temp, store)
}

#[test]
fn given_no_file_when_get_then_none_and_parent_created() {
    // Given
    let (temp, store) = temp_store();

    // When
    let value = store.get("betterAuth_currentUser").unwrap();

    // Then
    assert_that!(value, none());
    assert!(temp.path().join("nested").is_dir());
    assert!(!store.path().exists());
}

#[test]
fn given_value_set_when_reopened_then_persists() {
    // Given
    let (temp, store) = temp_store();
    store.set("hasSkippedSignup", "true").unwrap();

    // When
    let reopened = FileStore::open(temp.path().join("nested/storage.json")).unwrap();

    // Then
    assert_that!(reopened.get("hasSkippedSignup").unwrap(), some(eq("true")));
}

#[test]
fn given_value_removed_when_get_then_none() {
    let (_temp, store) = temp_store();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    store.remove("a").unwrap();

    assert_that!(store.get("a").unwrap(), none());
    assert_that!(store.get("b").unwrap(), some(eq("2")));
}

#[test]
fn given_write_when_done_then_no_temp_file_left() {
    let (temp, store) = temp_store();
    store.set("a", "1").unwrap();

    let leftovers: Vec<PathBuf> = std::fs::read_dir(temp.path().join("nested"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().contains(".tmp."))
        .collect();

    assert!(leftovers.is_empty(), "temp files left: {leftovers:?}");
}

#[test]
fn given_corrupted_file_when_get_then_corrupted_error() {
    // Given
    let (_temp, store) = temp_store();
    std::fs::write(store.path(), "{not json").unwrap();

    // When
    let result = store.get("anything");

    // Then
    match result {
        Err(StorageError::Corrupted { .. }) => {}
        other => panic!("Expected Corrupted, got {other:?}"),
    }
}

#[test]
fn given_corrupted_file_when_recover_then_backed_up_and_store_usable() {
    // Given
    let (_temp, store) = temp_store();
    std::fs::write(store.path(), "[1, 2, 3]").unwrap();

    // When
    let backup = store.recover().unwrap();

    // Then
    let backup = backup.expect("backup path");
    assert!(backup.to_string_lossy().contains(".corrupted."));
    assert!(backup.exists());
    assert!(!store.path().exists());
    assert_that!(store.set("k", "v"), ok(anything()));
}

#[test]
fn given_healthy_file_when_recover_then_nothing_happens() {
    let (_temp, store) = temp_store();
    store.set("k", "v").unwrap();

    assert_that!(store.recover().unwrap(), none());
    assert_that!(store.get("k").unwrap(), some(eq("v")));
}

#[test]
fn given_empty_file_when_get_then_treated_as_empty() {
    let (_temp, store) = temp_store();
    std::fs::write(store.path(), "   ").unwrap();

    assert_that!(store.get("k").unwrap(), none());
}

#[test]
fn given_path_is_directory_when_get_then_io_error_with_reader_message() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    let err = store.get("k").unwrap_err();

    assert!(matches!(err, StorageError::Io { action: "read", .. }));
    assert_that!(
        err.user_message(),
        eq("Unable to access saved session data. Check disk space and file permissions.")
    );
}
