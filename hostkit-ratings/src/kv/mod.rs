//! Key-value storage backends
//!
//! The host platform owns durable storage; this module defines the call
//! contract the rating store depends on, plus two backends: an in-memory
//! map and a SQLite settings table.

pub mod memory;
pub mod sqlite;

use crate::error::Result;
use async_trait::async_trait;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Process-wide durable key-value storage
///
/// All values are stored as strings; callers own the encoding. Every
/// operation may fail with a storage error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a single value, `None` if the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a single value, overwriting any existing one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Read several keys in one round trip, position-matched to the input
    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>>;

    /// List all keys currently present
    async fn keys(&self) -> Result<Vec<String>>;
}
