//! Core types and trait definitions for the Casebook test-case store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod result;
pub mod store;
pub mod test_case;

mod payload;

pub use error::{Error, Result};
pub use payload::JsonObject;
