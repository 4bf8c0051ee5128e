//! Interactive view stand-in
//!
//! Drives both subsystems from a line-oriented command loop and prints
//! the feedback a real UI would render. The map canvas and dialer are
//! logging implementations of the respective capabilities.

use safehaven_dispatch::{DispatchController, DispatchEvent, EmergencyDialer, HoldKind};
use safehaven_domain::{GeoPoint, LocationFix, LocationSlot};
use safehaven_overlay::{MapCanvas, RouteSafetyOverlay, RouteStyle, Viewport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

/// Map canvas that logs draw operations instead of rendering
pub struct LoggingCanvas;

impl MapCanvas for LoggingCanvas {
    fn replace_route(&self, path: &[GeoPoint], style: RouteStyle) {
        info!(
            points = path.len(),
            color = style.color,
            width = style.width,
            "route line replaced"
        );
    }

    fn fit_bounds(&self, viewport: Viewport) {
        info!(
            sw_lat = viewport.south_west.lat,
            sw_lng = viewport.south_west.lng,
            ne_lat = viewport.north_east.lat,
            ne_lng = viewport.north_east.lng,
            padding = viewport.padding,
            duration_ms = viewport.duration_ms,
            "viewport fitted"
        );
    }
}

/// Dialer that logs the number instead of placing a call
pub struct LoggingDialer;

impl EmergencyDialer for LoggingDialer {
    fn dial(&self, number: &str) {
        info!(%number, "dial requested");
    }
}

/// Consume controller feedback and surface it the way a UI would
pub fn spawn_event_printer(mut events: UnboundedReceiver<DispatchEvent>) {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                DispatchEvent::StateChanged(state) => info!(?state, "dispatch state"),
                DispatchEvent::DispatchConfirmed => info!("SOS sent successfully"),
                DispatchEvent::DispatchFailed(err) => warn!(%err, "dispatch cycle failed"),
            }
        }
    });
}

/// Run the command loop until `quit` or EOF
pub async fn run(
    controller: DispatchController,
    overlay: RouteSafetyOverlay,
    location: LocationSlot,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("commands: fix <lat> <lng> | hold sos|police | release | cancel | route <dest> | state | quit");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "fix" => match parse_fix(rest) {
                Some((lat, lng)) => {
                    location.update(LocationFix::now(lat, lng));
                    info!(lat, lng, "location fix updated");
                }
                None => println!("usage: fix <lat> <lng>"),
            },
            "hold" => match rest {
                "sos" => controller.start_hold(HoldKind::Sos),
                "police" => controller.start_hold(HoldKind::Police),
                _ => println!("usage: hold sos|police"),
            },
            "release" => controller.end_hold(),
            "cancel" => controller.cancel(),
            "route" if !rest.is_empty() => match overlay.find_safe_route(rest).await {
                Ok(summary) => {
                    println!("Route Safety: {}", summary.tier_label);
                    println!("Reasons: {}", summary.reasons_text);
                }
                Err(err) => println!("{err}"),
            },
            "route" => println!("usage: route <destination>"),
            "state" => println!("{:?}", controller.state()),
            "quit" | "exit" => break,
            other => println!("unknown command: {other}"),
        }
    }

    controller.reset();
    Ok(())
}

fn parse_fix(rest: &str) -> Option<(f64, f64)> {
    let mut parts = rest.split_whitespace();
    let lat = parts.next()?.parse().ok()?;
    let lng = parts.next()?.parse().ok()?;
    Some((lat, lng))
}
