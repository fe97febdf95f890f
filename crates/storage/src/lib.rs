//! Storage layer for bookstall.
//!
//! Persists synthetic book attributes (price, rating, like set) keyed by the
//! external catalog id. SQLite is the default backend; PostgreSQL is
//! available behind the `postgres` feature.

pub mod backend;
pub mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
pub mod pg_migrations;
#[cfg(feature = "postgres")]
pub mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::AttributeStore;
pub use traits::attribute::ATTRIBUTES_ENTITY;
