//! Catalog client for the Google Books volumes API.
//!
//! Raw volume payloads never leave this crate: they are narrowed into
//! [`bookstall_core::CatalogItem`] as soon as they are decoded.

pub mod api_types;
pub mod client;
pub mod error;

#[cfg(test)]
mod client_tests;

pub use api_types::OrderBy;
pub use client::{DEFAULT_BASE_URL, GoogleBooksClient};
pub use error::CatalogError;
