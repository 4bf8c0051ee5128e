//! Capabilities consumed by the dispatch controller

#![warn(missing_docs)]

use crate::error::DispatchError;
use async_trait::async_trait;
use safehaven_domain::DispatchRequest;

/// Transport for the SOS broadcast
///
/// Exactly one send is in flight per controller instance. A send, once
/// issued, is never cancelled; its completion is always observed.
#[async_trait]
pub trait SosTransport: Send + Sync {
    /// Deliver the dispatch request to the backend
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError>;
}

/// Phone-dial capability for the police action
///
/// Fire-and-forget: no response is expected and the call is not
/// retried.
pub trait EmergencyDialer: Send + Sync {
    /// Dial the given emergency number
    fn dial(&self, number: &str);
}
