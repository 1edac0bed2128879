//! Contact form submissions and the lead notification contract.
//!
//! A submission is validated (all four fields present and non-empty), turned
//! into a `Lead` and handed to a `LeadSink` exactly once. Nothing is stored
//! and failed deliveries are never retried; the visitor resubmits.

use crate::i18n::Locale;
use crate::metrics::LeadMetrics;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

/// Raw contact form payload.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a malformed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Language the visitor used; selects the response language
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// A required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Form label in `locale`.
    pub fn label(self, locale: Locale) -> &'static str {
        let strings = locale.config().strings;
        match self {
            Field::Name => strings.field_name,
            Field::Email => strings.field_email,
            Field::Phone => strings.field_phone,
            Field::Message => strings.field_message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {missing:?}")]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl ValidationError {
    /// Localized message naming the missing fields.
    pub fn message(&self, locale: Locale) -> String {
        let fields = self
            .missing
            .iter()
            .map(|field| field.label(locale))
            .collect::<Vec<_>>()
            .join(", ");
        locale
            .config()
            .strings
            .contact_missing_fields
            .replace("{fields}", &fields)
    }
}

/// A validated submission, ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub locale: Locale,
    pub received_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Check that every required field is present and non-blank.
    ///
    /// # Returns
    /// * `Ok(Lead)` with trimmed values
    /// * `Err(ValidationError)` listing every missing field, in form order
    pub fn validate(&self) -> Result<Lead, ValidationError> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|&field| self.field(field).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let value = |field| self.field(field).unwrap_or_default().to_string();
        Ok(Lead {
            name: value(Field::Name),
            email: value(Field::Email),
            phone: value(Field::Phone),
            message: value(Field::Message),
            locale: self.locale(),
            received_at: Utc::now(),
        })
    }
}

/// Confirmation that a lead was handed off.
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    /// Identifier assigned by the delivery service, when it returns one
    pub id: Option<String>,
    pub delivered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("mail transport failed: {0}")]
    Transport(String),

    #[error("mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Destination for validated leads.
pub trait LeadSink: Send + Sync {
    /// Deliver one lead. Called at most once per submission.
    fn submit(&self, lead: Lead) -> BoxFuture<'_, Result<Ack, DeliveryError>>;
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Validate a submission and deliver it through `sink`.
///
/// Invalid submissions never reach the sink.
pub async fn process_submission(
    sink: &dyn LeadSink,
    metrics: &LeadMetrics,
    submission: ContactSubmission,
) -> Result<Ack, ContactError> {
    metrics.record_received();

    let lead = match submission.validate() {
        Ok(lead) => lead,
        Err(e) => {
            metrics.record_rejected();
            warn!("Rejected contact submission: {}", e);
            return Err(e.into());
        }
    };

    let locale = lead.locale;
    match sink.submit(lead).await {
        Ok(ack) => {
            metrics.record_delivered();
            info!("Lead delivered (locale: {}, id: {:?})", locale, ack.id);
            Ok(ack)
        }
        Err(e) => {
            metrics.record_failed();
            error!("Lead delivery failed: {}", e);
            Err(e.into())
        }
    }
}
