//! Error types for lexical record generation.

use thiserror::Error;

/// The error type for generation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No valid JSON object could be located in the model output.
    ///
    /// Carries the full response text for diagnostics.
    #[error("could not find a valid JSON object in model response; full response:\n{raw}")]
    Parse {
        /// The complete text the model returned.
        raw: String,
    },

    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error status or an unusable payload.
    #[error("generation backend error: {0}")]
    Backend(String),

    /// Every attempt failed; wraps the last underlying failure.
    #[error("generation failed after {attempts} attempts: {source}")]
    Exhausted {
        /// Total attempts made, including the first.
        attempts: u32,
        /// The failure of the final attempt.
        source: Box<Error>,
    },
}

/// A specialized Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
