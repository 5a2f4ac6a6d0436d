//! Error types for hostkit-media

use thiserror::Error;

/// Common result type for media-library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Media-library error
#[derive(Error, Debug)]
pub enum Error {
    /// Caller passed a malformed argument; raised before the native
    /// service is invoked
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation is not available on this platform
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure reported by the native media service; passed through
    /// untranslated
    #[error("Media service error: {0}")]
    Service(String),
}
