//! Error types for hostkit-ratings
//!
//! Storage backends surface typed errors; the public [`RatingStore`] surface
//! converts them to absent values at the boundary.
//!
//! [`RatingStore`]: crate::store::RatingStore

use thiserror::Error;

/// Common result type for storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Storage-layer error
#[derive(Error, Debug)]
pub enum Error {
    /// Database connection or query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend-specific storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}
