//! Configuration module for trafficjam
//!
//! The whole run is driven by one JSON file, loaded once and never mutated.
//! Secrets (`api_key`, `smtp.pass`) are NEVER rendered by `Debug`.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::mask_secret;

/// SMTP submission settings
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &mask_secret(&self.pass))
            .finish()
    }
}

/// Route, threshold and delivery settings for one run
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Origin location, as accepted by the distance-matrix API
    pub origins: String,
    /// Destination location
    pub destinations: String,
    /// Distance-matrix API key
    pub api_key: String,
    /// Travel mode (driving, walking, ...). Empty means not sent.
    #[serde(default)]
    pub mode: String,
    /// Features to avoid (tolls, highways, ...). Empty means not sent.
    #[serde(default)]
    pub avoid: String,
    /// best_guess / pessimistic / optimistic. Empty means not sent.
    #[serde(default)]
    pub traffic_model: String,
    /// Alert threshold in minutes
    #[serde(rename = "max_duration")]
    pub max_duration_minutes: u32,
    pub smtp: SmtpConfig,
    /// Single alert recipient
    pub recipient: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("origins", &self.origins)
            .field("destinations", &self.destinations)
            .field("api_key", &mask_secret(&self.api_key))
            .field("mode", &self.mode)
            .field("avoid", &self.avoid)
            .field("traffic_model", &self.traffic_model)
            .field("max_duration_minutes", &self.max_duration_minutes)
            .field("smtp", &self.smtp)
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl Config {
    /// Read and parse the config file at `path`
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        let data = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::ConfigReadFailed,
                format!("reading {}", path.display()),
                e,
            )
        })?;

        let config = Self::from_json(&data).map_err(|e| AppError {
            message: format!("parsing {}", path.display()),
            ..e
        })?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse config from a JSON string
    pub fn from_json(data: &str) -> AppResult<Self> {
        serde_json::from_str(data)
            .map_err(|e| AppError::with_source(ErrorCode::ConfigInvalid, "invalid config", e))
    }
}
