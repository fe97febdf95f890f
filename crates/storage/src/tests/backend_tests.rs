#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_record, create_test_storage};
use crate::{AttributeStore, StorageBackend};

#[tokio::test]
async fn backend_dispatches_to_sqlite() {
    let (storage, _dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);
    assert_eq!(backend.kind(), "sqlite");

    let record = create_test_record("vol-9", 25, 1);
    assert!(backend.insert_attributes_if_absent(&record).await.unwrap());
    assert!(!backend.insert_attributes_if_absent(&record).await.unwrap());

    let liked = backend.add_like("vol-9", "dana").await.unwrap();
    assert!(liked.is_liked_by("dana"));

    let unliked = backend.remove_like("vol-9", "dana").await.unwrap().unwrap();
    assert!(unliked.liked_by.is_empty());

    let found = backend.find_attributes("vol-9").await.unwrap().unwrap();
    assert_eq!(found.price, 25);
}

#[tokio::test]
async fn backend_add_like_missing_record_surfaces_not_found() {
    let (storage, _dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);

    let err = backend.add_like("ghost", "dana").await.unwrap_err();
    assert!(err.is_not_found());
}
