//! Hold-to-arm dispatch controller
//!
//! A finite-state value plus two cancellable timer handles, guarded by
//! a per-press cycle number. Timer callbacks revalidate both the state
//! and the cycle under the controller lock before acting, so a cancel
//! or release that lands first strictly prevents the transition even
//! when the callback task has already woken.

#![warn(missing_docs)]

use crate::capabilities::{EmergencyDialer, SosTransport};
use crate::config::DispatchConfig;
use crate::error::DispatchError;
use safehaven_domain::{DispatchRequest, LocationSlot};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Which floating button is being held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldKind {
    /// Dial the fixed emergency number; fires immediately at threshold
    Police,
    /// Silent SOS broadcast; fires into a cancellation window
    Sos,
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchState {
    /// No gesture in progress
    Idle,
    /// A press is being timed against the hold threshold
    Holding {
        /// Gesture being held
        kind: HoldKind,
    },
    /// SOS fired; the cancellation window is running
    CountdownPending,
    /// The dispatch send is in flight and no longer revocable
    Dispatching,
    /// The send succeeded; success feedback is displayed
    Confirmed,
}

/// Feedback events for the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// The controller moved to a new state
    StateChanged(DispatchState),
    /// The dispatch send succeeded
    DispatchConfirmed,
    /// A dispatch cycle ended in an error; the controller is idle again
    DispatchFailed(DispatchError),
}

struct StateCell {
    state: DispatchState,
    /// Incremented on every press and every explicit cancellation;
    /// stale timer callbacks see a mismatch and do nothing
    cycle: u64,
    hold_timer: Option<JoinHandle<()>>,
    countdown_timer: Option<JoinHandle<()>>,
}

struct ControllerInner {
    subject_id: String,
    config: DispatchConfig,
    location: LocationSlot,
    transport: Arc<dyn SosTransport>,
    dialer: Arc<dyn EmergencyDialer>,
    events: UnboundedSender<DispatchEvent>,
    cell: Mutex<StateCell>,
}

/// Hold-to-arm / countdown / single-flight dispatch controller
///
/// Exactly one instance per active view. Cheap to clone; clones share
/// the same state machine.
#[derive(Clone)]
pub struct DispatchController {
    inner: Arc<ControllerInner>,
}

impl DispatchController {
    /// Create a controller and the event stream the UI consumes
    pub fn new(
        subject_id: impl Into<String>,
        config: DispatchConfig,
        location: LocationSlot,
        transport: Arc<dyn SosTransport>,
        dialer: Arc<dyn EmergencyDialer>,
    ) -> (Self, UnboundedReceiver<DispatchEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let inner = Arc::new(ControllerInner {
            subject_id: subject_id.into(),
            config,
            location,
            transport,
            dialer,
            events,
            cell: Mutex::new(StateCell {
                state: DispatchState::Idle,
                cycle: 0,
                hold_timer: None,
                countdown_timer: None,
            }),
        });
        (Self { inner }, rx)
    }

    /// Current controller state
    pub fn state(&self) -> DispatchState {
        self.inner.lock_cell().state
    }

    /// Begin timing a press
    ///
    /// No-op unless the controller is idle: a second hold while a
    /// countdown, dispatch, or confirmation is active is ignored until
    /// the cycle resets.
    pub fn start_hold(&self, kind: HoldKind) {
        let mut cell = self.inner.lock_cell();
        if !matches!(cell.state, DispatchState::Idle) {
            debug!(state = ?cell.state, "hold ignored, cycle already active");
            return;
        }
        cell.cycle += 1;
        let cycle = cell.cycle;
        cell.state = DispatchState::Holding { kind };
        self.inner.emit(DispatchEvent::StateChanged(cell.state));
        debug!(?kind, cycle, "hold started");

        let inner = Arc::clone(&self.inner);
        let threshold = self.inner.config.hold_threshold();
        cell.hold_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(threshold).await;
            inner.fire(cycle).await;
        }));
    }

    /// Release the press
    ///
    /// Before the hold threshold elapses this aborts the pending fire
    /// with no side effect. After firing it is a no-op; firing is not
    /// reversible by release.
    pub fn end_hold(&self) {
        let mut cell = self.inner.lock_cell();
        if let DispatchState::Holding { kind } = cell.state {
            if let Some(timer) = cell.hold_timer.take() {
                timer.abort();
            }
            cell.cycle += 1;
            cell.state = DispatchState::Idle;
            self.inner.emit(DispatchEvent::StateChanged(cell.state));
            debug!(?kind, "released before threshold");
        }
    }

    /// Abort a pending SOS countdown
    ///
    /// Valid only while the cancellation window is running. Once the
    /// send is in flight cancellation has no effect.
    pub fn cancel(&self) {
        let mut cell = self.inner.lock_cell();
        if matches!(cell.state, DispatchState::CountdownPending) {
            if let Some(timer) = cell.countdown_timer.take() {
                timer.abort();
            }
            cell.cycle += 1;
            cell.state = DispatchState::Idle;
            self.inner.emit(DispatchEvent::StateChanged(cell.state));
            info!("sos countdown cancelled");
        } else {
            debug!(state = ?cell.state, "cancel ignored");
        }
    }

    /// Reset on view teardown: abort all timers and return to idle
    pub fn reset(&self) {
        let mut cell = self.inner.lock_cell();
        if let Some(timer) = cell.hold_timer.take() {
            timer.abort();
        }
        if let Some(timer) = cell.countdown_timer.take() {
            timer.abort();
        }
        cell.cycle += 1;
        cell.state = DispatchState::Idle;
    }
}

impl ControllerInner {
    fn lock_cell(&self) -> MutexGuard<'_, StateCell> {
        self.cell.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, event: DispatchEvent) {
        // Receiver may be gone during teardown; feedback is best-effort
        let _ = self.events.send(event);
    }

    /// Hold threshold reached
    async fn fire(self: Arc<Self>, cycle: u64) {
        let fired = {
            let mut cell = self.lock_cell();
            if cell.cycle != cycle {
                return;
            }
            let DispatchState::Holding { kind } = cell.state else {
                return;
            };
            cell.hold_timer = None;
            match kind {
                HoldKind::Police => {
                    cell.state = DispatchState::Idle;
                    self.emit(DispatchEvent::StateChanged(cell.state));
                }
                HoldKind::Sos => {
                    cell.state = DispatchState::CountdownPending;
                    self.emit(DispatchEvent::StateChanged(cell.state));
                    let inner = Arc::clone(&self);
                    let window = self.config.cancel_window();
                    cell.countdown_timer = Some(tokio::spawn(async move {
                        tokio::time::sleep(window).await;
                        inner.dispatch(cycle).await;
                    }));
                }
            }
            kind
        };

        match fired {
            HoldKind::Police => {
                info!(number = %self.config.emergency_number, "police hold fired, dialing");
                self.dialer.dial(&self.config.emergency_number);
            }
            HoldKind::Sos => {
                info!(window_ms = self.config.cancel_window_ms, "sos armed, countdown running");
            }
        }
    }

    /// Cancellation window elapsed without a cancel
    async fn dispatch(self: Arc<Self>, cycle: u64) {
        let request = {
            let mut cell = self.lock_cell();
            if cell.cycle != cycle || !matches!(cell.state, DispatchState::CountdownPending) {
                return;
            }
            cell.countdown_timer = None;
            // The fix current at window expiry, not the one at press time
            match self.location.current() {
                None => {
                    warn!("dispatch refused, no location fix");
                    cell.state = DispatchState::Idle;
                    self.emit(DispatchEvent::DispatchFailed(
                        DispatchError::LocationUnavailable,
                    ));
                    self.emit(DispatchEvent::StateChanged(cell.state));
                    return;
                }
                Some(fix) => {
                    cell.state = DispatchState::Dispatching;
                    self.emit(DispatchEvent::StateChanged(cell.state));
                    DispatchRequest::from_fix(self.subject_id.clone(), &fix)
                }
            }
        };

        info!(
            lat = request.origin_lat,
            lng = request.origin_lng,
            "issuing sos dispatch"
        );
        match self.transport.send(&request).await {
            Ok(()) => {
                let mut cell = self.lock_cell();
                if cell.cycle != cycle || !matches!(cell.state, DispatchState::Dispatching) {
                    return;
                }
                cell.state = DispatchState::Confirmed;
                self.emit(DispatchEvent::DispatchConfirmed);
                self.emit(DispatchEvent::StateChanged(cell.state));
                let inner = Arc::clone(&self);
                let display = self.config.confirm_display();
                cell.countdown_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(display).await;
                    inner.clear_confirmation(cycle);
                }));
            }
            Err(err) => {
                warn!(error = %err, "sos dispatch failed");
                let mut cell = self.lock_cell();
                if cell.cycle != cycle {
                    return;
                }
                cell.state = DispatchState::Idle;
                self.emit(DispatchEvent::DispatchFailed(err));
                self.emit(DispatchEvent::StateChanged(cell.state));
            }
        }
    }

    /// Success feedback display duration elapsed
    fn clear_confirmation(self: Arc<Self>, cycle: u64) {
        let mut cell = self.lock_cell();
        if cell.cycle != cycle || !matches!(cell.state, DispatchState::Confirmed) {
            return;
        }
        cell.countdown_timer = None;
        cell.state = DispatchState::Idle;
        self.emit(DispatchEvent::StateChanged(cell.state));
        debug!("confirmation cleared, controller idle");
    }
}
