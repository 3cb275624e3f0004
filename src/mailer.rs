//! Outbound email transport.
//!
//! [`SmtpMailer`] wraps a lettre async SMTP transport. If no SMTP host is
//! configured it operates in no-op mode (logs only), which keeps local
//! development working without email infrastructure. The [`Mailer`] trait
//! is the seam the share handler depends on.

use crate::config::EmailConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use tracing::{info, warn};

/// One outbound message per successful share submission.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Async SMTP mailer (or no-op when unconfigured).
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the mailer from configuration.
    ///
    /// An empty SMTP host selects no-op mode.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let from = config
            .smtp_from
            .parse::<Mailbox>()
            .map_err(|e| AppError::Internal(format!("invalid SMTP_FROM address: {e}")))?;

        let transport = if config.smtp_host.trim().is_empty() {
            warn!("SMTP host not configured; mailer will operate in no-op mode");
            None
        } else {
            let builder = if config.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            }
            .map_err(|e| AppError::Internal(format!("failed to configure SMTP transport: {e}")))?
            .port(config.smtp_port);

            let builder = if let (Some(username), Some(password)) =
                (&config.smtp_username, &config.smtp_password)
            {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport, from })
    }

    /// Whether a real SMTP transport is configured.
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let Some(transport) = &self.transport else {
            info!(subject, to, "mailer in no-op mode; skipping actual send");
            return Ok(());
        };

        let to = to
            .parse::<Mailbox>()
            .map_err(|e| AppError::Mail(format!("invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::Mail(format!("failed to build message: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::Mail(format!("smtp send failed: {e}")))?;
        info!(subject, "share email sent");
        Ok(())
    }
}
