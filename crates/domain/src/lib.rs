//! Domain types for the SafeHaven core
//!
//! This crate contains the shared data model with no I/O dependencies:
//! - Geographic primitives and the single live location fix
//! - Route safety classification
//! - Dispatch request and session context

pub mod geo;
pub mod request;
pub mod safety;

pub use geo::{GeoPoint, LocationFix, LocationSlot};
pub use request::{DispatchRequest, SessionContext};
pub use safety::{RouteSafetyResult, SafetyTier};
