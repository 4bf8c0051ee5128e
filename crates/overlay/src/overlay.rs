//! Geocode → safety query → tiered render pipeline
//!
//! Each stage suspends the caller until its result or failure arrives.
//! The overlay holds no queue: overlapping runs are allowed to race and
//! the last one to complete wins, since in-flight network calls are
//! never cancelled. A stricter variant would attach a sequence number
//! to each run and discard stale renders; the product behavior does
//! not require it.

#![warn(missing_docs)]

use crate::capabilities::{Geocoder, MapCanvas, RouteScorer, RouteStyle, Viewport};
use crate::error::OverlayError;
use safehaven_domain::{GeoPoint, LocationSlot, RouteSafetyResult};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Shown when the backend supplies no reasons
const FALLBACK_REASONS: &str = "Computed from reports and time of day";

const ROUTE_LINE_WIDTH: f32 = 6.0;
const ROUTE_LINE_OPACITY: f32 = 0.8;
const FIT_PADDING: u32 = 60;
const FIT_ANIMATION_MS: u64 = 1200;

/// Content of the textual summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Upper-cased safety tier
    pub tier_label: &'static str,
    /// Reasons joined for display, or the static fallback explanation
    pub reasons_text: String,
}

/// Route safety overlay for a single map view
pub struct RouteSafetyOverlay {
    location: LocationSlot,
    geocoder: Arc<dyn Geocoder>,
    scorer: Arc<dyn RouteScorer>,
    canvas: Arc<dyn MapCanvas>,
    /// Panel state; also serializes the apply step so a run's render
    /// and summary land together
    panel: Mutex<Option<RouteSummary>>,
}

impl RouteSafetyOverlay {
    /// Create an overlay bound to the view's location slot and canvas
    pub fn new(
        location: LocationSlot,
        geocoder: Arc<dyn Geocoder>,
        scorer: Arc<dyn RouteScorer>,
        canvas: Arc<dyn MapCanvas>,
    ) -> Self {
        Self {
            location,
            geocoder,
            scorer,
            canvas,
            panel: Mutex::new(None),
        }
    }

    /// Run the full pipeline for one "Find Safe Route" press
    ///
    /// Re-invoking with the same destination re-runs all stages; there
    /// is no caching. On error the previously rendered route, if any,
    /// stays on the map.
    pub async fn find_safe_route(&self, destination: &str) -> Result<RouteSummary, OverlayError> {
        let origin = self
            .location
            .current()
            .ok_or(OverlayError::LocationUnavailable)?
            .point();

        debug!(%destination, "resolving destination");
        let resolved = self
            .geocoder
            .forward_geocode(destination)
            .await?
            .ok_or_else(|| {
                warn!(%destination, "geocoding returned zero results");
                OverlayError::DestinationNotFound
            })?;

        debug!(lat = resolved.lat, lng = resolved.lng, "scoring route");
        let result = self.scorer.score(origin, resolved).await?;

        info!(
            tier = result.tier.label(),
            points = result.path.len(),
            "route scored, rendering"
        );
        Ok(self.apply(origin, resolved, &result))
    }

    /// Current summary panel content, if a run has completed
    pub fn summary(&self) -> Option<RouteSummary> {
        self.lock_panel().clone()
    }

    fn lock_panel(&self) -> MutexGuard<'_, Option<RouteSummary>> {
        self.panel.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Render and summarize stages, applied as one unit at completion
    fn apply(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        result: &RouteSafetyResult,
    ) -> RouteSummary {
        let style = RouteStyle {
            color: result.tier.color(),
            width: ROUTE_LINE_WIDTH,
            opacity: ROUTE_LINE_OPACITY,
        };
        let viewport = Viewport {
            south_west: GeoPoint::new(
                origin.lat.min(destination.lat),
                origin.lng.min(destination.lng),
            ),
            north_east: GeoPoint::new(
                origin.lat.max(destination.lat),
                origin.lng.max(destination.lng),
            ),
            padding: FIT_PADDING,
            duration_ms: FIT_ANIMATION_MS,
        };
        let summary = RouteSummary {
            tier_label: result.tier.label(),
            reasons_text: if result.reasons.is_empty() {
                FALLBACK_REASONS.to_string()
            } else {
                result.reasons.join(", ")
            },
        };

        let mut panel = self.lock_panel();
        self.canvas.replace_route(&result.path, style);
        self.canvas.fit_bounds(viewport);
        *panel = Some(summary.clone());
        summary
    }
}
