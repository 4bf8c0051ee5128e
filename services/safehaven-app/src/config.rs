//! Application configuration
//!
//! Loaded from a JSON file passed via `--config`, or assembled from
//! environment variables. Never hardcoded in the binary.

use safehaven_dispatch::DispatchConfig;
use safehaven_domain::SessionContext;
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    pub mapbox_token: String,
    pub session: SessionContext,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AppConfig {
            backend_url: env::var("SAFEHAVEN_BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            mapbox_token: env::var("SAFEHAVEN_MAPBOX_TOKEN")
                .map_err(|_| ConfigError::MissingEnv("SAFEHAVEN_MAPBOX_TOKEN"))?,
            session: SessionContext {
                user_id: env::var("SAFEHAVEN_USER_ID")
                    .map_err(|_| ConfigError::MissingEnv("SAFEHAVEN_USER_ID"))?,
                name: env::var("SAFEHAVEN_USER_NAME").unwrap_or_default(),
                phone: env::var("SAFEHAVEN_USER_PHONE").unwrap_or_default(),
            },
            dispatch: DispatchConfig::default(),
        })
    }
}
