//! Error types for contour extraction.

use thiserror::Error;

/// Errors that can occur while preparing inputs or extracting contours.
#[derive(Error, Debug)]
pub enum ContourError {
    /// The sample buffer does not match the declared grid shape.
    #[error("invalid field shape: {0}")]
    InvalidShape(String),

    /// The raw byte buffer cannot be interpreted as 32-bit float samples.
    #[error("invalid sample dtype: {0}")]
    InvalidDtype(String),

    /// The level list changes direction partway through.
    #[error("non-monotonic levels: {0}")]
    NonMonotonicLevels(String),

    /// Vertex storage could not be grown.
    #[error("vertex storage allocation failed")]
    OutOfMemory,
}

impl ContourError {
    /// Create an InvalidShape error.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Create an InvalidDtype error.
    pub fn invalid_dtype(msg: impl Into<String>) -> Self {
        Self::InvalidDtype(msg.into())
    }

    /// Create a NonMonotonicLevels error.
    pub fn non_monotonic(msg: impl Into<String>) -> Self {
        Self::NonMonotonicLevels(msg.into())
    }
}

/// Result type for contour operations.
pub type Result<T> = std::result::Result<T, ContourError>;
