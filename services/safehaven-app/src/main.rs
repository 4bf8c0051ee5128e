use anyhow::Context;
use safehaven_backend::{BackendClient, MapboxGeocoder};
use safehaven_dispatch::{DispatchController, SosTransport};
use safehaven_domain::LocationSlot;
use safehaven_overlay::{Geocoder, MapCanvas, RouteSafetyOverlay, RouteScorer};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::init;

mod config;
mod view;

use config::AppConfig;
use view::{LoggingCanvas, LoggingDialer};

const APP_PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct VersionHandshake {
    version: &'static str,
    protocol_version: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--version-json") {
        let handshake = VersionHandshake {
            version: env!("CARGO_PKG_VERSION"),
            protocol_version: APP_PROTOCOL_VERSION,
        };
        println!("{}", serde_json::to_string(&handshake)?);
        return Ok(());
    }

    init();

    let config = match parse_config_path(&args) {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::from_env().context("assembling config from environment")?,
    };
    info!(backend = %config.backend_url, user = %config.session.user_id, "safehaven-app starting");

    let location = LocationSlot::new();
    let client = Arc::new(BackendClient::new(
        &config.backend_url,
        config.session.clone(),
    ));
    let geocoder: Arc<dyn Geocoder> = Arc::new(MapboxGeocoder::new(&config.mapbox_token));
    let canvas: Arc<dyn MapCanvas> = Arc::new(LoggingCanvas);

    let (controller, events) = DispatchController::new(
        config.session.user_id.clone(),
        config.dispatch.clone(),
        location.clone(),
        Arc::clone(&client) as Arc<dyn SosTransport>,
        Arc::new(LoggingDialer),
    );
    let overlay = RouteSafetyOverlay::new(
        location.clone(),
        geocoder,
        Arc::clone(&client) as Arc<dyn RouteScorer>,
        canvas,
    );

    view::spawn_event_printer(events);
    view::run(controller, overlay, location).await
}

fn parse_config_path(args: &[String]) -> Option<PathBuf> {
    let mut args_iter = args.iter();
    while let Some(arg) = args_iter.next() {
        if arg == "--config" {
            return args_iter.next().map(PathBuf::from);
        }
    }
    None
}
