//! Constants Module - Single Source of Truth
//!
//! Every fixed value the pipeline relies on (program name, endpoint,
//! query literals, mail framing) is defined here. No other module
//! hardcodes these.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name, also used in the alert subject line
pub const APP_NAME: &str = "trafficjam";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for HTTP requests
pub const USER_AGENT: &str = concat!("trafficjam/", env!("CARGO_PKG_VERSION"));

/// Default log filter when RUST_LOG is not set.
/// Quiet by default so a scheduled run that does not alert prints nothing.
pub const DEFAULT_LOG_FILTER: &str = "trafficjam=warn";

// ============================================
// DISTANCE MATRIX API
// ============================================

/// Distance-matrix JSON endpoint
pub const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// `departure_time` is always "now" so the API returns traffic-adjusted durations
pub const DEPARTURE_TIME_NOW: &str = "now";

/// Success status, both top-level and per element
pub const STATUS_OK: &str = "OK";

// ============================================
// MAIL
// ============================================

/// Standard mail line ending
pub const CRLF: &str = "\r\n";

/// Subject line for the alert mail
pub fn alert_subject() -> String {
    format!("{} alert", APP_NAME)
}

/// Mask a secret so only its length is visible in logs
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        format!("***({} chars)", secret.chars().count())
    }
}
