//! Failure log storage for GPTA.
//!
//! This crate provides a trait-based store for organs and their failure
//! history, with an in-memory reference implementation and the data set
//! the dashboard starts with.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory_storage;
pub mod seed;

pub use trait_::{Storage, StorageError, Result};
pub use memory_storage::MemoryStorage;
