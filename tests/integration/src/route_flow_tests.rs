//! End-to-end route safety scenarios

use crate::test_utils::{
    FixedScorer, RecordingCanvas, RecordingDialer, RecordingTransport, TableGeocoder,
};
use safehaven_dispatch::{DispatchConfig, DispatchController, HoldKind};
use safehaven_domain::{GeoPoint, LocationFix, LocationSlot, SafetyTier};
use safehaven_overlay::{OverlayError, RouteSafetyOverlay};
use std::time::Duration;

fn slot_with_fix() -> LocationSlot {
    let slot = LocationSlot::new();
    slot.update(LocationFix::now(12.9716, 77.5946));
    slot
}

/// Enter "Airport", get one geocoding match and an UNSAFE tier with
/// two reasons: the rendered line is red and the summary panel shows
/// the tier and both reasons joined.
#[tokio::test]
async fn unsafe_airport_route_renders_red_with_both_reasons() {
    let canvas = RecordingCanvas::new();
    let overlay = RouteSafetyOverlay::new(
        slot_with_fix(),
        TableGeocoder::new(&[("Airport", GeoPoint::new(13.1986, 77.7066))]),
        FixedScorer::new(
            SafetyTier::Unsafe,
            &["Poor lighting", "Recent incident reports"],
            vec![GeoPoint::new(12.9716, 77.5946), GeoPoint::new(13.1986, 77.7066)],
        ),
        canvas.clone(),
    );

    let summary = overlay.find_safe_route("Airport").await.unwrap();
    assert_eq!(summary.tier_label, "UNSAFE");
    assert_eq!(summary.reasons_text, "Poor lighting, Recent incident reports");
    assert_eq!(canvas.last_color(), Some("#dc2626"));

    let viewports = canvas.viewports.lock().unwrap();
    assert_eq!(viewports.len(), 1);
    assert_eq!(viewports[0].padding, 60);
    assert_eq!(viewports[0].duration_ms, 1200);
}

#[tokio::test]
async fn unknown_destination_aborts_without_clearing_prior_render() {
    let canvas = RecordingCanvas::new();
    let overlay = RouteSafetyOverlay::new(
        slot_with_fix(),
        TableGeocoder::new(&[("Airport", GeoPoint::new(13.1986, 77.7066))]),
        FixedScorer::new(SafetyTier::Safe, &[], vec![GeoPoint::new(12.97, 77.59)]),
        canvas.clone(),
    );

    overlay.find_safe_route("Airport").await.unwrap();
    let err = overlay.find_safe_route("Atlantis").await.unwrap_err();
    assert_eq!(err, OverlayError::DestinationNotFound);
    assert_eq!(canvas.draws.lock().unwrap().len(), 1);
    assert_eq!(canvas.last_color(), Some("#16a34a"));
}

/// Both subsystems read the one live fix owned by the view.
#[tokio::test(start_paused = true)]
async fn dispatch_and_route_share_the_same_fix() {
    let slot = slot_with_fix();
    let transport = RecordingTransport::new();
    let (controller, _events) = DispatchController::new(
        "user-42",
        DispatchConfig::default(),
        slot.clone(),
        transport.clone(),
        RecordingDialer::new(),
    );
    let canvas = RecordingCanvas::new();
    let overlay = RouteSafetyOverlay::new(
        slot.clone(),
        TableGeocoder::new(&[("Home", GeoPoint::new(12.93, 77.61))]),
        FixedScorer::new(SafetyTier::Moderate, &["Mixed reports"], vec![]),
        canvas,
    );

    // A fresh fix lands before either subsystem runs
    slot.update(LocationFix::now(12.9352, 77.6245));

    overlay.find_safe_route("Home").await.unwrap();

    controller.start_hold(HoldKind::Sos);
    tokio::time::sleep(Duration::from_millis(3100)).await;
    tokio::time::sleep(Duration::from_millis(5100)).await;
    tokio::task::yield_now().await;

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].origin_lat, 12.9352);
    assert_eq!(calls[0].origin_lng, 77.6245);
}
