//! Distance-Matrix Client - traffic-aware travel time for one route
//!
//! One GET per run, no retry. The response goes through a fixed validation
//! sequence and either yields a `RouteQueryResult` or fails with the first
//! check that did not pass:
//! 1. transport failure      -> NetworkError
//! 2. body is not the shape  -> ParseError
//! 3. top-level status != OK -> APIError (status verbatim)
//! 4. rows != 1              -> APIError
//! 5. elements != 1          -> APIError
//! 6. element status != OK   -> APIError (status verbatim)
//!
//! The API key is never logged; request URLs are masked first.

use tracing::{debug, info};

use crate::models::config::Config;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{DistanceMatrixResponse, RouteQueryResult};
use crate::utils::constants::{
    mask_secret, DEPARTURE_TIME_NOW, DISTANCE_MATRIX_URL, STATUS_OK, USER_AGENT,
};

/// Query parameter carrying the API key
const KEY_PARAM: &str = "key";

/// Distance-matrix API client
pub struct DistanceMatrixClient {
    client: reqwest::Client,
    base_url: String,
}

impl DistanceMatrixClient {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url(DISTANCE_MATRIX_URL)
    }

    /// Client against a different endpoint (local test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build the query, dropping every empty parameter.
    /// `departure_time=now` is always present.
    pub fn query_params(config: &Config) -> Vec<(&'static str, String)> {
        [
            ("origins", config.origins.as_str()),
            ("destinations", config.destinations.as_str()),
            (KEY_PARAM, config.api_key.as_str()),
            ("mode", config.mode.as_str()),
            ("avoid", config.avoid.as_str()),
            ("departure_time", DEPARTURE_TIME_NOW),
            ("traffic_model", config.traffic_model.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect()
    }

    /// Request URL with the API key masked, safe for logs
    pub fn masked_url(&self, params: &[(&'static str, String)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| {
                if *key == KEY_PARAM {
                    format!("{}={}", key, mask_secret(value))
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.base_url, query)
    }

    /// Query current traffic-adjusted travel time for the configured route
    pub async fn query(&self, config: &Config) -> AppResult<RouteQueryResult> {
        let params = Self::query_params(config);

        info!("🚗 Querying travel time: {} -> {}", config.origins, config.destinations);
        debug!("GET {}", self.masked_url(&params));

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        debug!("Distance matrix HTTP status: {}", response.status());

        // Consumes the response; the connection is released on every path from here.
        let body = response.text().await?;

        let parsed: DistanceMatrixResponse = serde_json::from_str(&body)?;
        let result = validate(parsed)?;

        info!(
            "📊 Travel time in traffic: {} ({}s)",
            result.duration_text, result.duration_seconds
        );
        Ok(result)
    }
}

/// Run the status/row/element checks and extract the traffic duration
pub fn validate(response: DistanceMatrixResponse) -> AppResult<RouteQueryResult> {
    if response.status != STATUS_OK {
        return Err(AppError::bad_status(&response.status));
    }

    let row = match response.rows.as_slice() {
        [row] => row,
        _ => return Err(AppError::row_count()),
    };

    let element = match row.elements.as_slice() {
        [element] => element,
        _ => return Err(AppError::element_count()),
    };

    if element.status != STATUS_OK {
        return Err(AppError::bad_element_status(&element.status));
    }

    let duration = element
        .duration_in_traffic
        .as_ref()
        .ok_or_else(|| AppError::parse("element has no duration_in_traffic"))?;

    Ok(RouteQueryResult {
        duration_seconds: duration.value,
        duration_text: duration.text.clone(),
    })
}
