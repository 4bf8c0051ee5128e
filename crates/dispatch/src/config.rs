//! Dispatch timing configuration

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_HOLD_THRESHOLD_MS: u64 = 3000;
const DEFAULT_CANCEL_WINDOW_MS: u64 = 5000;
const DEFAULT_CONFIRM_DISPLAY_MS: u64 = 3000;
const DEFAULT_EMERGENCY_NUMBER: &str = "112";

/// Timing and dialing configuration for the dispatch controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Minimum sustained press duration before a gesture fires
    #[serde(alias = "holdThresholdMs")]
    pub hold_threshold_ms: u64,
    /// Delay between an SOS firing and the actual send, during which
    /// the user may abort
    #[serde(alias = "cancelWindowMs")]
    pub cancel_window_ms: u64,
    /// How long the success feedback stays visible before resetting
    pub confirm_display_ms: u64,
    /// Number dialed by the police action
    pub emergency_number: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: DEFAULT_HOLD_THRESHOLD_MS,
            cancel_window_ms: DEFAULT_CANCEL_WINDOW_MS,
            confirm_display_ms: DEFAULT_CONFIRM_DISPLAY_MS,
            emergency_number: DEFAULT_EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl DispatchConfig {
    /// Hold threshold as a duration
    pub fn hold_threshold(&self) -> Duration {
        Duration::from_millis(self.hold_threshold_ms)
    }

    /// Cancellation window as a duration
    pub fn cancel_window(&self) -> Duration {
        Duration::from_millis(self.cancel_window_ms)
    }

    /// Confirmation display duration
    pub fn confirm_display(&self) -> Duration {
        Duration::from_millis(self.confirm_display_ms)
    }
}
