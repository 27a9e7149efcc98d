//! Tests for best-score persistence.

use std::fs;

use strictly_2048::{BEST_SCORE_KEY, BestScore, JsonFileStore, KeyValueStore, MemoryStore};
use tempfile::TempDir;

#[test]
fn test_best_starts_at_zero() {
    let best = BestScore::new(MemoryStore::new());
    assert_eq!(best.best().expect("read"), 0);
}

#[test]
fn test_record_only_raises() {
    let mut best = BestScore::new(MemoryStore::new());
    assert_eq!(best.record(100).expect("record"), 100);
    assert_eq!(best.record(40).expect("record"), 100);
    assert_eq!(best.record(100).expect("record"), 100);
    assert_eq!(best.record(180).expect("record"), 180);
    assert_eq!(best.store().get(BEST_SCORE_KEY).expect("get"), Some(180));
}

#[test]
fn test_zero_score_does_not_write() {
    let mut best = BestScore::new(MemoryStore::new());
    assert_eq!(best.record(0).expect("record"), 0);
    assert_eq!(best.store().get(BEST_SCORE_KEY).expect("get"), None);
}

#[test]
fn test_clear_resets_to_zero() {
    let mut best = BestScore::new(MemoryStore::new());
    best.record(512).expect("record");
    best.clear().expect("clear");
    assert_eq!(best.best().expect("read"), 0);
}

#[test]
fn test_custom_key_is_isolated() {
    let mut store = MemoryStore::new();
    store.set(BEST_SCORE_KEY, 999).expect("set");
    let best = BestScore::with_key(store, "best_5x5");
    assert_eq!(best.best().expect("read"), 0);
}

#[test]
fn test_file_store_missing_file_reads_empty() {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonFileStore::new(dir.path().join("best.json"));
    assert_eq!(store.get(BEST_SCORE_KEY).expect("get"), None);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("best.json");

    let mut best = BestScore::new(JsonFileStore::new(&path));
    best.record(2048).expect("record");

    let reopened = BestScore::new(JsonFileStore::new(&path));
    assert_eq!(reopened.best().expect("read"), 2048);

    let content = fs::read_to_string(&path).expect("file written");
    assert!(content.contains(BEST_SCORE_KEY));
}

#[test]
fn test_file_store_keeps_other_keys() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("scores.json");
    let mut store = JsonFileStore::new(&path);
    store.set("a", 1).expect("set");
    store.set("b", 2).expect("set");
    store.set("a", 3).expect("set");
    assert_eq!(store.get("a").expect("get"), Some(3));
    assert_eq!(store.get("b").expect("get"), Some(2));
}

#[test]
fn test_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("best.json");
    fs::write(&path, "not json").expect("write");

    let store = JsonFileStore::new(&path);
    let err = store.get(BEST_SCORE_KEY).expect_err("corrupt file");
    assert!(err.to_string().contains("Failed to parse"));
}
