//! Threshold evaluation
//!
//! Alert when travel time is strictly above the configured maximum.

use crate::models::types::RouteQueryResult;

/// True when `result` is longer than `max_minutes`. Exactly at the limit is not an alert.
#[inline]
pub fn exceeds(result: &RouteQueryResult, max_minutes: u32) -> bool {
    result.duration_seconds > u64::from(max_minutes) * 60
}
