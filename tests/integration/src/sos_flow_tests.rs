//! End-to-end SOS dispatch scenarios

use crate::test_utils::{RecordingDialer, RecordingTransport};
use safehaven_dispatch::{DispatchConfig, DispatchController, DispatchState, HoldKind};
use safehaven_domain::{LocationFix, LocationSlot};
use std::time::Duration;

async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

fn controller_with_fix() -> (
    DispatchController,
    std::sync::Arc<RecordingTransport>,
    LocationSlot,
) {
    let transport = RecordingTransport::new();
    let slot = LocationSlot::new();
    slot.update(LocationFix::now(12.9716, 77.5946));
    let (controller, events) = DispatchController::new(
        "user-42",
        DispatchConfig::default(),
        slot.clone(),
        transport.clone(),
        RecordingDialer::new(),
    );
    // Feedback is exercised in unit tests; here it may be dropped
    drop(events);
    (controller, transport, slot)
}

/// Hold SOS for 3000ms, wait out the 5000ms window: exactly one send
/// with the last known coordinates, confirmation shown for a fixed
/// duration, then idle again.
#[tokio::test(start_paused = true)]
async fn full_sos_cycle_sends_once_and_resets() {
    let (controller, transport, slot) = controller_with_fix();

    controller.start_hold(HoldKind::Sos);
    settle(3100).await;
    assert_eq!(controller.state(), DispatchState::CountdownPending);

    // The fix moves while the countdown runs; the send must carry the
    // value current at window expiry
    slot.update(LocationFix::now(12.9352, 77.6245));
    settle(5100).await;

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].subject_id, "user-42");
    assert_eq!(calls[0].origin_lat, 12.9352);
    assert_eq!(calls[0].origin_lng, 77.6245);
    assert_eq!(controller.state(), DispatchState::Confirmed);

    settle(3100).await;
    assert_eq!(controller.state(), DispatchState::Idle);
    assert_eq!(transport.calls().len(), 1);
}

/// Hold SOS for 3000ms, press cancel 2000ms into the window: zero
/// sends, controller idle.
#[tokio::test(start_paused = true)]
async fn cancel_two_seconds_into_window_sends_nothing() {
    let (controller, transport, _slot) = controller_with_fix();

    controller.start_hold(HoldKind::Sos);
    settle(3100).await;
    settle(2000).await;
    controller.cancel();
    settle(60_000).await;

    assert!(transport.calls().is_empty());
    assert_eq!(controller.state(), DispatchState::Idle);
}

/// A full cycle may be retried from scratch after completion.
#[tokio::test(start_paused = true)]
async fn controller_accepts_a_new_hold_after_cycle_completes() {
    let (controller, transport, _slot) = controller_with_fix();

    controller.start_hold(HoldKind::Sos);
    settle(3100).await;
    settle(5100).await;
    settle(3100).await;
    assert_eq!(controller.state(), DispatchState::Idle);

    controller.start_hold(HoldKind::Sos);
    settle(3100).await;
    settle(5100).await;
    assert_eq!(transport.calls().len(), 2);
}
