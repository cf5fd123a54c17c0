//! Error types for state construction, measurement and dataset generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for qst-cgan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the library.
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Two operands live in Hilbert spaces of different size.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A matrix operation needs a square matrix.
    #[error("Matrix must be square, got shape ({rows}, {cols})")]
    NotSquare { rows: usize, cols: usize },

    /// A state cannot be normalized because its trace (or norm) vanishes.
    #[error("Degenerate state: {0}")]
    DegenerateState(String),

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Create an IO error carrying the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context: path.into().display().to_string(),
            source,
        }
    }
}
