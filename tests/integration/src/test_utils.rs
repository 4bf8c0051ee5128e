//! Shared in-memory capability implementations

use async_trait::async_trait;
use safehaven_dispatch::{DispatchError, EmergencyDialer, SosTransport};
use safehaven_domain::{DispatchRequest, GeoPoint, RouteSafetyResult, SafetyTier};
use safehaven_overlay::{Geocoder, MapCanvas, OverlayError, RouteScorer, RouteStyle, Viewport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Transport that records every dispatch request it receives
pub struct RecordingTransport {
    calls: Mutex<Vec<DispatchRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<DispatchRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SosTransport for RecordingTransport {
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        self.calls.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// Dialer that records dialed numbers
pub struct RecordingDialer {
    pub dialed: Mutex<Vec<String>>,
}

impl RecordingDialer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            dialed: Mutex::new(Vec::new()),
        })
    }
}

impl EmergencyDialer for RecordingDialer {
    fn dial(&self, number: &str) {
        self.dialed.lock().unwrap().push(number.to_string());
    }
}

/// Geocoder backed by a fixed lookup table
pub struct TableGeocoder {
    entries: HashMap<String, GeoPoint>,
}

impl TableGeocoder {
    pub fn new(entries: &[(&str, GeoPoint)]) -> Arc<Self> {
        Arc::new(Self {
            entries: entries
                .iter()
                .map(|(name, point)| (name.to_string(), *point))
                .collect(),
        })
    }
}

#[async_trait]
impl Geocoder for TableGeocoder {
    async fn forward_geocode(&self, query: &str) -> Result<Option<GeoPoint>, OverlayError> {
        Ok(self.entries.get(query).copied())
    }
}

/// Scorer returning a fixed result for every query
pub struct FixedScorer {
    result: RouteSafetyResult,
}

impl FixedScorer {
    pub fn new(tier: SafetyTier, reasons: &[&str], path: Vec<GeoPoint>) -> Arc<Self> {
        Arc::new(Self {
            result: RouteSafetyResult {
                path,
                tier,
                reasons: reasons.iter().map(|r| r.to_string()).collect(),
            },
        })
    }
}

#[async_trait]
impl RouteScorer for FixedScorer {
    async fn score(
        &self,
        _origin: GeoPoint,
        _destination: GeoPoint,
    ) -> Result<RouteSafetyResult, OverlayError> {
        Ok(self.result.clone())
    }
}

/// Canvas recording every draw and viewport adjustment
#[derive(Default)]
pub struct RecordingCanvas {
    pub draws: Mutex<Vec<(Vec<GeoPoint>, RouteStyle)>>,
    pub viewports: Mutex<Vec<Viewport>>,
}

impl RecordingCanvas {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last_color(&self) -> Option<&'static str> {
        self.draws.lock().unwrap().last().map(|(_, style)| style.color)
    }
}

impl MapCanvas for RecordingCanvas {
    fn replace_route(&self, path: &[GeoPoint], style: RouteStyle) {
        self.draws.lock().unwrap().push((path.to_vec(), style));
    }

    fn fit_bounds(&self, viewport: Viewport) {
        self.viewports.lock().unwrap().push(viewport);
    }
}
