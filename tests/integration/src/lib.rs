//! Cross-crate scenario tests for the SafeHaven core
//!
//! This test suite validates:
//! - The full SOS hold / countdown / dispatch / confirmation cycle
//! - Cancellation inside the window producing zero network calls
//! - The route pipeline from destination text to tiered render
//! - Both subsystems sharing one location fix

pub mod test_utils;

#[cfg(test)]
mod route_flow_tests;

#[cfg(test)]
mod sos_flow_tests;
