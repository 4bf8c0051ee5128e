//! HTTP implementations of the backend capabilities
//!
//! [`BackendClient`] speaks to the SafeHaven backend (`/api/sos`,
//! `/api/route-safety`); [`MapboxGeocoder`] forward-geocodes free-text
//! destinations. Both are thin `reqwest` wrappers behind the
//! capability traits the core subsystems consume.

pub mod client;
pub mod error;
pub mod geocode;

pub use client::BackendClient;
pub use error::BackendError;
pub use geocode::MapboxGeocoder;
