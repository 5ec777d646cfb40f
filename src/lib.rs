//! trafficjam Library
//!
//! Checks a commute route's traffic-adjusted travel time against a
//! threshold and emails an alert when it is exceeded:
//! - Config: one JSON file per run
//! - Query: one distance-matrix GET, strictly validated
//! - Evaluate: duration > max minutes
//! - Notify: one plaintext mail over PLAIN-auth SMTP

pub mod core;
pub mod models;
pub mod monitor;
pub mod providers;
pub mod utils;

pub use crate::core::exceeds;
pub use models::{AppError, AppResult, Config, ErrorCategory, ErrorCode, Outcome, RouteQueryResult, SmtpConfig};
pub use monitor::CommuteMonitor;
pub use providers::{compose_message, AlertMailer, DistanceMatrixClient, LocalIdentity};
