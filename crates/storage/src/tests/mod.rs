//! Test utilities and module declarations for storage tests.

use std::collections::BTreeSet;

use bookstall_core::SyntheticAttributeRecord;
use chrono::Utc;
use tempfile::TempDir;

use crate::Storage;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_record(id: &str, price: u32, rating: u8) -> SyntheticAttributeRecord {
    SyntheticAttributeRecord {
        id: id.to_owned(),
        price,
        rating,
        liked_by: BTreeSet::new(),
        created_at: Utc::now(),
    }
}

mod attribute_tests;
mod backend_tests;
