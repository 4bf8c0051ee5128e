//! Capabilities consumed by the route overlay

#![warn(missing_docs)]

use crate::error::OverlayError;
use async_trait::async_trait;
use safehaven_domain::{GeoPoint, RouteSafetyResult};

/// Forward geocoding of free-text destinations
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a destination to coordinates
    ///
    /// `Ok(None)` means the provider returned zero results; transport
    /// failures surface as errors.
    async fn forward_geocode(&self, query: &str) -> Result<Option<GeoPoint>, OverlayError>;
}

/// Backend route-safety scoring
#[async_trait]
pub trait RouteScorer: Send + Sync {
    /// Score the path from origin to destination
    async fn score(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteSafetyResult, OverlayError>;
}

/// Line styling for a rendered route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    /// Hex line color, derived from the safety tier
    pub color: &'static str,
    /// Line width in pixels
    pub width: f32,
    /// Line opacity
    pub opacity: f32,
}

/// Viewport adjustment bounding origin and destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// South-west corner of the bounding box
    pub south_west: GeoPoint,
    /// North-east corner of the bounding box
    pub north_east: GeoPoint,
    /// Padding around the bounds in pixels
    pub padding: u32,
    /// Animation duration in milliseconds
    pub duration_ms: u64,
}

/// Map rendering capability (owned by the mapping SDK)
///
/// Implementations use interior mutability; the overlay calls them
/// from within its apply step so one run's draw is never interleaved
/// with another's.
pub trait MapCanvas: Send + Sync {
    /// Remove any existing route line, then add the given path
    ///
    /// Remove-then-add, not an incremental update.
    fn replace_route(&self, path: &[GeoPoint], style: RouteStyle);

    /// Animate the viewport to the given bounds
    fn fit_bounds(&self, viewport: Viewport);
}
