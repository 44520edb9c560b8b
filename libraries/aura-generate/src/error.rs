//! Error types for playlist generation

use thiserror::Error;

/// Errors from the playlist generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No API credential is configured
    ///
    /// Recoverable: the UI disables generation and explains why.
    #[error("Generator credential is not configured")]
    NotConfigured,

    /// HTTP request failed
    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model endpoint returned an error response
    #[error("Generator upstream error ({status}): {message}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// The model returned data that does not match the requested schema
    #[error("Generator returned malformed data: {0}")]
    Malformed(String),

    /// A generation request is already outstanding
    #[error("A generation request is already in flight")]
    Busy,
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
