//! SMTP Alert Mailer
//!
//! Sends one plaintext alert to one recipient over PLAIN-authenticated SMTP.
//! The sender is `<local user>@<local hostname>`, resolved at send time.
//! Transport is any `lettre::AsyncTransport` so tests can swap in the stub.

use lettre::address::{Address, Envelope};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, info};

use crate::models::config::Config;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{alert_subject, CRLF};

/// Sending identity of the local machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalIdentity {
    pub user: String,
    pub hostname: String,
}

impl LocalIdentity {
    pub fn new(user: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            hostname: hostname.into(),
        }
    }

    /// Resolve user name and hostname from the execution environment
    pub fn resolve() -> AppResult<Self> {
        let user = whoami::fallible::username()
            .map_err(|e| AppError::environment("cannot resolve local user name", e))?;
        let hostname = whoami::fallible::hostname()
            .map_err(|e| AppError::environment("cannot resolve local hostname", e))?;

        Ok(Self { user, hostname })
    }

    /// `user@hostname` as a mail address
    pub fn address(&self) -> AppResult<Address> {
        let raw = format!("{}@{}", self.user, self.hostname);
        raw.parse::<Address>()
            .map_err(|e| AppError::environment(format!("invalid sender address {}", raw), e))
    }
}

/// Raw alert message: To and Subject headers, blank line, body, CRLF endings
pub fn compose_message(recipient: &str, body: &str) -> String {
    format!(
        "To: {recipient}{CRLF}Subject: {subject}{CRLF}{CRLF}{body}{CRLF}",
        subject = alert_subject(),
    )
}

/// PLAIN credentials may only cross an unencrypted connection to the local machine
pub fn plaintext_auth_allowed(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}

/// Alert mailer bound to one recipient
pub struct AlertMailer<T> {
    transport: T,
    recipient: String,
}

impl AlertMailer<AsyncSmtpTransport<Tokio1Executor>> {
    /// Mailer for the configured SMTP server. Auth is PLAIN only.
    /// STARTTLS is required unless the server is on the local machine, where
    /// it is used only when offered. A remote server without STARTTLS fails
    /// before any credentials are sent.
    pub fn smtp(config: &Config) -> AppResult<Self> {
        let smtp = &config.smtp;

        let params = TlsParameters::new(smtp.host.clone()).map_err(AppError::mail)?;
        let tls = if plaintext_auth_allowed(&smtp.host) {
            Tls::Opportunistic(params)
        } else {
            Tls::Required(params)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp.host.as_str())
            .port(smtp.port)
            .tls(tls)
            .credentials(Credentials::new(smtp.user.clone(), smtp.pass.clone()))
            .authentication(vec![Mechanism::Plain])
            .build();

        debug!("SMTP transport for {}:{} as {}", smtp.host, smtp.port, smtp.user);
        Ok(Self::new(transport, config.recipient.clone()))
    }
}

impl<T> AlertMailer<T>
where
    T: AsyncTransport + Sync,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(transport: T, recipient: impl Into<String>) -> Self {
        Self {
            transport,
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Send the alert with `body` as its only content. No retry.
    pub async fn send_alert(&self, sender: &LocalIdentity, body: &str) -> AppResult<()> {
        let from = sender.address()?;
        let to = self.recipient.parse::<Address>().map_err(|e| {
            AppError::with_source(
                ErrorCode::MailBadRecipient,
                format!("invalid recipient {}", self.recipient),
                e,
            )
        })?;

        let envelope = Envelope::new(Some(from.clone()), vec![to]).map_err(AppError::mail)?;
        let message = compose_message(&self.recipient, body);

        self.transport
            .send_raw(&envelope, message.as_bytes())
            .await
            .map_err(AppError::mail)?;

        info!("📧 Alert sent to {} from {}", self.recipient, from);
        Ok(())
    }
}
