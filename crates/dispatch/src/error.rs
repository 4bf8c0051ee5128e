//! Error types for dispatch operations

#![warn(missing_docs)]

use thiserror::Error;

/// Errors reported by the dispatch controller
///
/// All variants are recovered at the UI boundary as user-visible
/// messages; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No location fix was available when the cancellation window
    /// elapsed; the dispatch is refused and no network call is issued
    #[error("location unavailable at dispatch time")]
    LocationUnavailable,

    /// The dispatch send was issued and failed; the controller returns
    /// to idle and the user may retry the full hold gesture
    #[error("dispatch send failed: {0}")]
    SendFailed(String),
}
