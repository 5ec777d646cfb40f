//! Commute Monitor - query, evaluate, notify
//!
//! Straight-line pipeline, each step either feeds the next or ends the run:
//! distance-matrix query -> threshold check -> (alert mail).

use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{info, warn};

use crate::core::threshold::exceeds;
use crate::models::config::Config;
use crate::models::errors::AppResult;
use crate::models::types::Outcome;
use crate::providers::distance_matrix::DistanceMatrixClient;
use crate::providers::smtp::{AlertMailer, LocalIdentity};

/// One run's worth of wiring
pub struct CommuteMonitor<T> {
    client: DistanceMatrixClient,
    mailer: AlertMailer<T>,
    /// Fixed sender; resolved from the environment at send time when None
    sender: Option<LocalIdentity>,
}

impl CommuteMonitor<AsyncSmtpTransport<Tokio1Executor>> {
    /// Production wiring: live API endpoint and the configured SMTP server
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            DistanceMatrixClient::new()?,
            AlertMailer::smtp(config)?,
        ))
    }
}

impl<T> CommuteMonitor<T>
where
    T: AsyncTransport + Sync,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(client: DistanceMatrixClient, mailer: AlertMailer<T>) -> Self {
        Self {
            client,
            mailer,
            sender: None,
        }
    }

    /// Use a fixed sender instead of resolving the local identity
    pub fn with_sender(mut self, sender: LocalIdentity) -> Self {
        self.sender = Some(sender);
        self
    }

    pub async fn run(&self, config: &Config) -> AppResult<Outcome> {
        let result = self.client.query(config).await?;

        if !exceeds(&result, config.max_duration_minutes) {
            info!(
                "✅ {} is within {} min, no alert",
                result.duration_text, config.max_duration_minutes
            );
            return Ok(Outcome::WithinThreshold(result));
        }

        warn!(
            "🚨 {} exceeds {} min, alerting {}",
            result.duration_text,
            config.max_duration_minutes,
            self.mailer.recipient()
        );

        let sender = match &self.sender {
            Some(sender) => sender.clone(),
            None => LocalIdentity::resolve()?,
        };
        self.mailer.send_alert(&sender, &result.duration_text).await?;

        Ok(Outcome::Alerted(result))
    }
}
