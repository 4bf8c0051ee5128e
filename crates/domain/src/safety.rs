//! Route safety classification
//!
//! The backend computes a coarse safety tier for each scored route. The
//! tier drives both the rendered line color and the summary panel text.

#![warn(missing_docs)]

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Coarse backend-computed classification of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    /// Route considered safe
    Safe,
    /// Route with some risk indicators
    Moderate,
    /// Route considered unsafe
    Unsafe,
}

impl SafetyTier {
    /// Upper-cased display label for the summary panel
    pub fn label(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "SAFE",
            SafetyTier::Moderate => "MODERATE",
            SafetyTier::Unsafe => "UNSAFE",
        }
    }

    /// Hex line color used when rendering the route
    pub fn color(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "#16a34a",
            SafetyTier::Moderate => "#f59e0b",
            SafetyTier::Unsafe => "#dc2626",
        }
    }
}

/// Result of one successful route safety query
///
/// Superseded, not merged, by the next query's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSafetyResult {
    /// Ordered path from origin to destination
    pub path: Vec<GeoPoint>,
    /// Backend-computed tier
    pub tier: SafetyTier,
    /// Ordered human-readable explanations, possibly empty
    pub reasons: Vec<String>,
}
