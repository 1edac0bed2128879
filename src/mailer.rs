//! Lead sinks: email delivery through an HTTP mail API, and a log-only sink
//! for environments without mail credentials.

use crate::config::Config;
use crate::contact::{Ack, DeliveryError, Lead, LeadSink};
use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Serialize)]
struct EmailRequest {
    from: String,
    to: Vec<String>,
    reply_to: String,
    subject: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct EmailResponse {
    id: Option<String>,
}

/// Sends each lead as one email to the business mailbox.
pub struct EmailSink {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    mailbox: String,
}

impl EmailSink {
    pub fn new(config: &Config, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.mail_timeout_secs))
            .build()
            .context("Failed to build mail HTTP client")?;

        Ok(Self {
            client,
            api_url: config.mail_api_url.clone(),
            api_key: api_key.to_string(),
            mailbox: config.contact_email.clone(),
        })
    }

    async fn send(&self, lead: Lead) -> Result<Ack, DeliveryError> {
        let request = EmailRequest {
            from: self.mailbox.clone(),
            to: vec![self.mailbox.clone()],
            reply_to: lead.email.clone(),
            subject: subject(&lead),
            text: body(&lead),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected { status, body });
        }

        // A missing or malformed body still means the message was accepted.
        let id = response
            .json::<EmailResponse>()
            .await
            .ok()
            .and_then(|r| r.id);

        Ok(Ack {
            id,
            delivered_at: Utc::now(),
        })
    }
}

impl LeadSink for EmailSink {
    fn submit(&self, lead: Lead) -> BoxFuture<'_, Result<Ack, DeliveryError>> {
        Box::pin(self.send(lead))
    }
}

/// Writes leads to the log instead of sending them.
pub struct LogSink;

impl LeadSink for LogSink {
    fn submit(&self, lead: Lead) -> BoxFuture<'_, Result<Ack, DeliveryError>> {
        Box::pin(async move {
            info!("{}\n{}", subject(&lead), body(&lead));
            Ok(Ack {
                id: None,
                delivered_at: Utc::now(),
            })
        })
    }
}

/// Pick the sink for `config`: email when a mail API key is set, log otherwise.
pub fn sink_from_config(config: &Config) -> Result<Box<dyn LeadSink>> {
    match &config.mail_api_key {
        Some(key) => Ok(Box::new(EmailSink::new(config, key)?)),
        None => Ok(Box::new(LogSink)),
    }
}

fn subject(lead: &Lead) -> String {
    format!("New website lead: {} ({})", lead.name, lead.locale.code())
}

fn body(lead: &Lead) -> String {
    let timestamp = lead.received_at.format("%Y-%m-%d %H:%M UTC");
    format!(
        "Received: {}\nLanguage: {}\n\nName: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        timestamp,
        lead.locale.name(),
        lead.name,
        lead.email,
        lead.phone,
        lead.message
    )
}
