//! Core types and logic for bookstall
//!
//! Domain types shared across all other crates, plus the two pieces of
//! business logic that do not touch I/O: catalog normalization and the
//! synthetic price/rating generators.

mod attributes;
mod catalog;
mod constants;
mod env_config;
mod error;
mod normalize;
mod pricing;

pub use attributes::*;
pub use catalog::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use normalize::*;
pub use pricing::*;
