//! Service layer for bookstall
//!
//! Centralizes business logic between HTTP/CLI handlers and storage/catalog.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod attribute_service;
mod book_service;
mod catalog_service;
pub mod error;

#[cfg(all(test, feature = "sqlite"))]
mod tests;

pub use attribute_service::AttributeService;
pub use book_service::{BookDetail, BookService};
pub use catalog_service::{CatalogService, ListingOptions};
pub use error::ServiceError;
