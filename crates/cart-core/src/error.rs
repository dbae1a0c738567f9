//! Cart Errors
//!
//! Error type shared by the storage, store and migration layers.

/// Errors surfaced by cart operations.
///
/// Malformed persisted data is never an error: readers fall back to an
/// empty cart instead.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The backing key/value storage rejected an operation
    #[error("storage error: {0}")]
    Storage(String),

    /// The cart could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Host-provided configuration is unusable
    #[error("invalid config: {0}")]
    Config(String),
}

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;
