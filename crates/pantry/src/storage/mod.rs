//! Storage backend implementation.
//!
//! This module provides the concrete implementation of the repository trait
//! defined in `pantry_core::storage`, backed by SQLite via `rusqlite` and
//! `tokio-rusqlite`.

pub mod sqlite;

pub use sqlite::SqliteItemRepository;
