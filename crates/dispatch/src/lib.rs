//! Emergency dispatch state machine
//!
//! Turns a sustained user gesture into a confirmable, cancellable
//! emergency broadcast. The controller is a leaf component: it depends
//! only on the shared location fix, a dispatch transport, and a
//! phone-dial capability.
//!
//! # State Transitions
//!
//! ```text
//! Idle
//!     ↓ (start_hold)
//! Holding
//!     ↓ (hold threshold reached, SOS)          — police dials and resets
//! CountdownPending
//!     ↓ (cancellation window elapses)
//! Dispatching
//!     ↓ (send succeeds)
//! Confirmed
//!     ↓ (display duration elapses)
//! Idle
//! ```
//!
//! Releasing before the threshold, cancelling during the countdown, or
//! a failed send all return the controller to `Idle`.

pub mod capabilities;
pub mod config;
pub mod controller;
pub mod error;

pub use capabilities::{EmergencyDialer, SosTransport};
pub use config::DispatchConfig;
pub use controller::{DispatchController, DispatchEvent, DispatchState, HoldKind};
pub use error::DispatchError;
