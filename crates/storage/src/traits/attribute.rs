use async_trait::async_trait;
use bookstall_core::SyntheticAttributeRecord;

use crate::error::StorageError;

/// Entity name used in `StorageError::NotFound` for attribute records.
pub const ATTRIBUTES_ENTITY: &str = "book attributes";

/// Per-book synthetic attribute persistence.
///
/// Every method is a single atomic operation on one record. Implementations
/// must enforce uniqueness of `id` in the database itself; callers rely on
/// [`insert_attributes_if_absent`](Self::insert_attributes_if_absent) rather
/// than on a prior read to avoid duplicate creation.
#[async_trait]
pub trait AttributeStore: Send + Sync {
    /// Look up a record by id.
    async fn find_attributes(
        &self,
        id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError>;

    /// Insert `record` unless one with the same id exists.
    /// Returns `true` if this call created the record.
    async fn insert_attributes_if_absent(
        &self,
        record: &SyntheticAttributeRecord,
    ) -> Result<bool, StorageError>;

    /// Add `user_id` to the like set. Idempotent.
    /// Fails with `NotFound` when no record exists for `id`.
    async fn add_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<SyntheticAttributeRecord, StorageError>;

    /// Remove `user_id` from the like set. Idempotent.
    /// Returns `None` (not an error) when no record exists for `id`.
    async fn remove_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError>;
}
