//! Forward geocoding via the Mapbox places API

#![warn(missing_docs)]

use async_trait::async_trait;
use reqwest::Url;
use safehaven_domain::GeoPoint;
use safehaven_overlay::{Geocoder, OverlayError};
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    /// `[lng, lat]` per the provider's convention
    center: [f64; 2],
}

/// Mapbox forward geocoder
#[derive(Debug, Clone)]
pub struct MapboxGeocoder {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxGeocoder {
    /// Create a geocoder using the public Mapbox endpoint
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_token)
    }

    /// Create a geocoder against a custom endpoint (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    fn request_url(&self, query: &str) -> Result<Url, OverlayError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| OverlayError::RouteUnavailable(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| OverlayError::RouteUnavailable("geocoder base url".into()))?
            .extend(["geocoding", "v5", "mapbox.places"])
            .push(&format!("{query}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn forward_geocode(&self, query: &str) -> Result<Option<GeoPoint>, OverlayError> {
        let url = self.request_url(query)?;
        debug!(%query, "forward geocoding");
        let response: GeocodeResponse = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| OverlayError::RouteUnavailable(err.to_string()))?
            .error_for_status()
            .map_err(|err| OverlayError::RouteUnavailable(err.to_string()))?
            .json()
            .await
            .map_err(|err| OverlayError::RouteUnavailable(err.to_string()))?;

        // First feature wins, center is [lng, lat]
        Ok(response
            .features
            .first()
            .map(|feature| GeoPoint::new(feature.center[1], feature.center[0])))
    }
}
