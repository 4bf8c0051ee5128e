//! Error types for backend calls

#![warn(missing_docs)]

use thiserror::Error;

/// Errors from the HTTP boundary
///
/// Trait implementations fold these into the core error taxonomy
/// before they reach a subsystem.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, non-2xx status)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}
