//! Type definitions for trafficjam
//! Distance-matrix response shape and the validated route result

use serde::Deserialize;

/// Distance-matrix API response
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

/// One origin's row of results
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// One origin/destination pair
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    pub status: String,
    /// Only present when departure_time is set and traffic data exists
    pub duration_in_traffic: Option<TextValue>,
}

/// A value paired with its human-readable rendering
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

/// Validated outcome of one distance-matrix query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQueryResult {
    /// Traffic-adjusted travel time in seconds
    pub duration_seconds: u64,
    /// Human-readable travel time, e.g. "25 mins"
    pub duration_text: String,
}

/// What a complete run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Travel time at or below the threshold, no mail sent
    WithinThreshold(RouteQueryResult),
    /// Travel time above the threshold, alert mail sent
    Alerted(RouteQueryResult),
}

impl Outcome {
    pub fn result(&self) -> &RouteQueryResult {
        match self {
            Outcome::WithinThreshold(r) | Outcome::Alerted(r) => r,
        }
    }

    pub fn alerted(&self) -> bool {
        matches!(self, Outcome::Alerted(_))
    }
}
