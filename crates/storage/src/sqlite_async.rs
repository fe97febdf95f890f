//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use bookstall_core::SyntheticAttributeRecord;

use crate::Storage;
use crate::error::StorageError;
use crate::traits::AttributeStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::TaskJoin(e.to_string()))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
}

#[async_trait]
impl AttributeStore for Storage {
    async fn find_attributes(
        &self,
        id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        delegate!(self, find_attributes, @str id)
    }

    async fn insert_attributes_if_absent(
        &self,
        record: &SyntheticAttributeRecord,
    ) -> Result<bool, StorageError> {
        delegate!(self, insert_attributes_if_absent, @ref record)
    }

    async fn add_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<SyntheticAttributeRecord, StorageError> {
        delegate!(self, add_like, @str id, @str user_id)
    }

    async fn remove_like(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<SyntheticAttributeRecord>, StorageError> {
        delegate!(self, remove_like, @str id, @str user_id)
    }
}
