//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend, so services depend on
//! behaviour rather than on a concrete database.

pub mod attribute;

pub use attribute::AttributeStore;
