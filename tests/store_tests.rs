//! Integration tests for the flat-file store.
//!
//! These tests verify initialization, the never-failing load path, and the
//! full-overwrite save path against files in a temp directory.

use std::fs;
use tempfile::TempDir;
use todo_server::store::TodoStore;
use todo_server::types::{Todo, now_iso};

/// Helper to create a todo with fixed fields for persistence tests.
fn sample_todo(id: i64, text: &str) -> Todo {
    Todo {
        id,
        text: text.to_string(),
        completed: false,
        created_at: now_iso(),
    }
}

#[test]
fn open_creates_directory_and_empty_file() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("data").join("todos.json");

    let store = TodoStore::open(&path).expect("Failed to open store");

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(store.load().is_empty());
}

#[test]
fn open_leaves_existing_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");
    fs::write(
        &path,
        r#"[{"id":1,"text":"keep me","completed":true,"createdAt":"2026-01-01T00:00:00.000Z"}]"#,
    )
    .unwrap();

    let store = TodoStore::open(&path).unwrap();
    let todos = store.load();

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[0].text, "keep me");
    assert!(todos[0].completed);
    assert_eq!(todos[0].created_at, "2026-01-01T00:00:00.000Z");
}

#[test]
fn load_returns_empty_for_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");
    let store = TodoStore::open(&path).unwrap();

    fs::remove_file(&path).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn load_returns_empty_for_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");
    let store = TodoStore::open(&path).unwrap();

    fs::write(&path, "{ not json at all").unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let store = TodoStore::open(temp.path().join("todos.json")).unwrap();

    let todos = vec![sample_todo(10, "first"), sample_todo(20, "second")];
    store.save(&todos).expect("Failed to save");

    assert_eq!(store.load(), todos);
}

#[test]
fn save_of_loaded_collection_preserves_content() {
    let temp = TempDir::new().unwrap();
    let store = TodoStore::open(temp.path().join("todos.json")).unwrap();
    store.save(&[sample_todo(1, "a"), sample_todo(2, "b")]).unwrap();

    let loaded = store.load();
    store.save(&loaded).unwrap();

    assert_eq!(store.load(), loaded);
}

#[test]
fn save_pretty_prints_with_camel_case_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("todos.json");
    let store = TodoStore::open(&path).unwrap();

    store.save(&[sample_todo(7, "pretty")]).unwrap();
    let raw = fs::read_to_string(&path).unwrap();

    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains('\n'), "expected pretty-printed output");
}

#[test]
fn save_overwrites_rather_than_appends() {
    let temp = TempDir::new().unwrap();
    let store = TodoStore::open(temp.path().join("todos.json")).unwrap();

    store.save(&[sample_todo(1, "old"), sample_todo(2, "older")]).unwrap();
    store.save(&[sample_todo(3, "only survivor")]).unwrap();

    let todos = store.load();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].text, "only survivor");
}
