//! Geographic primitives and the shared location fix
//!
//! The containing view owns exactly one live [`LocationFix`] at a time,
//! held in a [`LocationSlot`]. The geolocation capability is the only
//! writer; the dispatch and route subsystems only read it.

#![warn(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// A coordinate pair in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geolocation fix delivered by the platform
///
/// At most one live value exists per view; each new fix overwrites the
/// previous one. Never persisted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// When the fix was delivered
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    /// Create a fix stamped with the current time
    pub fn now(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp: Utc::now(),
        }
    }

    /// The fix as a coordinate pair
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Shared cell holding the single live location fix
///
/// Written only by the geolocation capability's callback and read by
/// both subsystems, so there are no write-write races. Cloning the
/// slot shares the underlying cell.
#[derive(Debug, Clone, Default)]
pub struct LocationSlot {
    inner: Arc<RwLock<Option<LocationFix>>>,
}

impl LocationSlot {
    /// Create an empty slot (no fix delivered yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the live fix with a newly delivered one
    pub fn update(&self, fix: LocationFix) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(fix);
    }

    /// The current fix, if any has been delivered
    pub fn current(&self) -> Option<LocationFix> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        *guard
    }
}
