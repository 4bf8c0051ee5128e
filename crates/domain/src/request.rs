//! Dispatch request and session context

#![warn(missing_docs)]

use crate::geo::LocationFix;
use serde::{Deserialize, Serialize};

/// An emergency dispatch request
///
/// Constructed only at the moment the cancellation window expires, from
/// the location fix current at that instant. Immutable once sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Identifier of the user on whose behalf the dispatch is sent
    pub subject_id: String,
    /// Latitude of the origin fix
    pub origin_lat: f64,
    /// Longitude of the origin fix
    pub origin_lng: f64,
}

impl DispatchRequest {
    /// Build a request from the fix current at window expiry
    pub fn from_fix(subject_id: impl Into<String>, fix: &LocationFix) -> Self {
        Self {
            subject_id: subject_id.into(),
            origin_lat: fix.latitude,
            origin_lng: fix.longitude,
        }
    }
}

/// Explicitly passed session identity
///
/// Replaces ambient session storage so the dispatch and route
/// subsystems carry no hidden dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Backend user identifier
    pub user_id: String,
    /// Display name sent with dispatches
    pub name: String,
    /// Contact phone sent with dispatches
    pub phone: String,
}
