#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_record, create_test_storage};
use crate::StorageError;

#[test]
fn find_missing_record_is_none() {
    let (storage, _dir) = create_test_storage();
    assert!(storage.find_attributes("nope").unwrap().is_none());
}

#[test]
fn insert_then_find_round_trips_fields() {
    let (storage, _dir) = create_test_storage();
    let record = create_test_record("vol-1", 45, 4);

    assert!(storage.insert_attributes_if_absent(&record).unwrap());

    let found = storage.find_attributes("vol-1").unwrap().unwrap();
    assert_eq!(found.price, 45);
    assert_eq!(found.rating, 4);
    assert!(found.liked_by.is_empty());
    assert_eq!(found.created_at.timestamp(), record.created_at.timestamp());
}

#[test]
fn second_insert_keeps_first_values() {
    let (storage, _dir) = create_test_storage();
    let first = create_test_record("vol-1", 30, 2);
    let second = create_test_record("vol-1", 95, 5);

    assert!(storage.insert_attributes_if_absent(&first).unwrap());
    assert!(!storage.insert_attributes_if_absent(&second).unwrap());

    let found = storage.find_attributes("vol-1").unwrap().unwrap();
    assert_eq!(found.price, 30);
    assert_eq!(found.rating, 2);
}

#[test]
fn insert_persists_initial_likes() {
    let (storage, _dir) = create_test_storage();
    let mut record = create_test_record("vol-1", 50, 3);
    record.liked_by.insert("alice".to_owned());
    record.liked_by.insert("bob".to_owned());

    storage.insert_attributes_if_absent(&record).unwrap();

    let found = storage.find_attributes("vol-1").unwrap().unwrap();
    assert_eq!(found.liked_by, record.liked_by);
}

#[test]
fn add_like_is_idempotent() {
    let (storage, _dir) = create_test_storage();
    storage.insert_attributes_if_absent(&create_test_record("vol-1", 50, 3)).unwrap();

    let once = storage.add_like("vol-1", "alice").unwrap();
    let twice = storage.add_like("vol-1", "alice").unwrap();

    assert_eq!(once.like_count(), 1);
    assert_eq!(twice.like_count(), 1);
    assert!(twice.is_liked_by("alice"));
}

#[test]
fn add_like_without_record_is_not_found() {
    let (storage, _dir) = create_test_storage();
    let err = storage.add_like("ghost", "alice").unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    assert!(matches!(err, StorageError::NotFound { id, .. } if id == "ghost"));
}

#[test]
fn remove_like_removes_only_that_user() {
    let (storage, _dir) = create_test_storage();
    storage.insert_attributes_if_absent(&create_test_record("vol-1", 50, 3)).unwrap();
    storage.add_like("vol-1", "alice").unwrap();
    storage.add_like("vol-1", "bob").unwrap();

    let record = storage.remove_like("vol-1", "alice").unwrap().unwrap();

    assert!(!record.is_liked_by("alice"));
    assert!(record.is_liked_by("bob"));
}

#[test]
fn remove_like_of_non_member_leaves_set_unchanged() {
    let (storage, _dir) = create_test_storage();
    storage.insert_attributes_if_absent(&create_test_record("vol-1", 50, 3)).unwrap();
    storage.add_like("vol-1", "bob").unwrap();

    let record = storage.remove_like("vol-1", "carol").unwrap().unwrap();
    assert_eq!(record.like_count(), 1);
}

#[test]
fn remove_like_without_record_is_none() {
    let (storage, _dir) = create_test_storage();
    assert!(storage.remove_like("ghost", "alice").unwrap().is_none());
}

#[test]
fn likes_are_scoped_per_book() {
    let (storage, _dir) = create_test_storage();
    storage.insert_attributes_if_absent(&create_test_record("vol-1", 50, 3)).unwrap();
    storage.insert_attributes_if_absent(&create_test_record("vol-2", 60, 4)).unwrap();

    storage.add_like("vol-1", "alice").unwrap();

    let other = storage.find_attributes("vol-2").unwrap().unwrap();
    assert!(other.liked_by.is_empty());
}

#[test]
fn reopening_database_keeps_records() {
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("reopen.db");
    {
        let storage = crate::Storage::new(&db_path).unwrap();
        storage.insert_attributes_if_absent(&create_test_record("vol-1", 70, 5)).unwrap();
        storage.add_like("vol-1", "alice").unwrap();
    }

    let storage = crate::Storage::new(&db_path).unwrap();
    let found = storage.find_attributes("vol-1").unwrap().unwrap();
    assert_eq!(found.price, 70);
    assert!(found.is_liked_by("alice"));
}
