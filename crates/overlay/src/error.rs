//! Error types for the route overlay pipeline

#![warn(missing_docs)]

use thiserror::Error;

/// Errors that abort a pipeline run
///
/// All variants are recovered at the UI boundary; a failed run never
/// clears a previously rendered route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// No location fix exists; the pipeline aborts before scoring
    #[error("location unavailable for route query")]
    LocationUnavailable,

    /// Forward geocoding returned zero results for the destination
    #[error("destination not found")]
    DestinationNotFound,

    /// The route-safety backend failed (transport or server error)
    #[error("route safety unavailable: {0}")]
    RouteUnavailable(String),
}
