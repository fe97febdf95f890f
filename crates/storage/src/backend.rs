//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use bookstall_core::SyntheticAttributeRecord;

use crate::error::StorageError;
use crate::traits::AttributeStore;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => {
                <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await
            },
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    /// # Errors
    /// Returns error if the database file cannot be opened or migrated.
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    /// # Errors
    /// Returns error if the server is unreachable or migrations fail.
    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs and the version endpoint.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl AttributeStore for StorageBackend {
    async fn find_attributes(
        &self,
        id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        dispatch!(self, AttributeStore, find_attributes(id))
    }

    async fn insert_attributes_if_absent(
        &self,
        record: &SyntheticAttributeRecord,
    ) -> Result<bool, StorageError> {
        dispatch!(self, AttributeStore, insert_attributes_if_absent(record))
    }

    async fn add_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<SyntheticAttributeRecord, StorageError> {
        dispatch!(self, AttributeStore, add_like(id, user_id))
    }

    async fn remove_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        dispatch!(self, AttributeStore, remove_like(id, user_id))
    }
}
