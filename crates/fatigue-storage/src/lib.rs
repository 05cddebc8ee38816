//! # fatigue-storage
//!
//! SQLite persistence for weekly ad features and lag-dependency statistics.
//! One serialized writer, a small read pool on file-backed databases, versioned
//! migrations, raw-SQL query modules.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::SqliteFatigueStore;

use fatigue_core::errors::{FatigueError, StoreError};

/// Wrap a SQLite failure message as a store error.
pub(crate) fn to_storage_err(message: String) -> FatigueError {
    StoreError::Sqlite { message }.into()
}
