//! Client for the SafeHaven backend API

#![warn(missing_docs)]

use crate::error::BackendError;
use async_trait::async_trait;
use safehaven_dispatch::{DispatchError, SosTransport};
use safehaven_domain::{DispatchRequest, GeoPoint, RouteSafetyResult, SafetyTier, SessionContext};
use safehaven_overlay::{OverlayError, RouteScorer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body of `POST /api/sos`
#[derive(Debug, Serialize)]
struct SosPayload<'a> {
    user_id: &'a str,
    name: &'a str,
    phone: &'a str,
    lat: f64,
    lng: f64,
}

/// Body of `POST /api/route-safety`; coordinates as `[lat, lng]`
#[derive(Debug, Serialize)]
struct RouteSafetyBody {
    origin: [f64; 2],
    destination: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RouteSafetyResponse {
    path: Vec<GeoPoint>,
    safety: SafetyTier,
    #[allow(dead_code)]
    score: Option<f64>,
    #[serde(default)]
    reasons: Vec<String>,
}

/// HTTP client for the SafeHaven backend
///
/// Carries the session context explicitly; there is no ambient session
/// state anywhere in the core.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl BackendClient {
    /// Create a client for the given base URL and session
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    async fn post_sos(&self, request: &DispatchRequest) -> Result<(), BackendError> {
        let payload = SosPayload {
            user_id: &request.subject_id,
            name: &self.session.name,
            phone: &self.session.phone,
            lat: request.origin_lat,
            lng: request.origin_lng,
        };
        debug!(url = %format!("{}/api/sos", self.base_url), "posting sos");
        self.http
            .post(format!("{}/api/sos", self.base_url))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn post_route_safety(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteSafetyResult, BackendError> {
        let body = RouteSafetyBody {
            origin: [origin.lat, origin.lng],
            destination: [destination.lat, destination.lng],
        };
        let response: RouteSafetyResponse = self
            .http
            .post(format!("{}/api/route-safety", self.base_url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(RouteSafetyResult {
            path: response.path,
            tier: response.safety,
            reasons: response.reasons,
        })
    }
}

#[async_trait]
impl SosTransport for BackendClient {
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        self.post_sos(request)
            .await
            .map_err(|err| DispatchError::SendFailed(err.to_string()))
    }
}

#[async_trait]
impl RouteScorer for BackendClient {
    async fn score(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteSafetyResult, OverlayError> {
        self.post_route_safety(origin, destination)
            .await
            .map_err(|err| OverlayError::RouteUnavailable(err.to_string()))
    }
}
