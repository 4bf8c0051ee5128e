//! Safety-scored route overlay
//!
//! Resolves a destination to coordinates, requests a safety-scored
//! path from the backend, and renders it with tier-dependent styling.
//! The overlay depends on three capabilities: a geocoder, a route
//! scorer, and a map canvas.

pub mod capabilities;
pub mod error;
pub mod overlay;

pub use capabilities::{Geocoder, MapCanvas, RouteScorer, RouteStyle, Viewport};
pub use error::OverlayError;
pub use overlay::{RouteSafetyOverlay, RouteSummary};
