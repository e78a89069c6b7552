//! Report ingestion pipeline.
//!
//! One call runs normalize, persist and notify strictly in that order. A
//! storage failure ends the call before any message is sent. A notification
//! failure is logged and recorded in the receipt but never turns a stored
//! report into an error.

use crate::error::WebhookError;
use crate::notifier::Notifier;
use crate::phone::normalize_phone;
use report_store::{NewReport, ReportStore};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Stored in place of a missing name or species.
pub const UNKNOWN: &str = "Unknown";

/// Report payload as posted by the voice agent.
///
/// Every field is optional and unknown fields are ignored. Numbers and
/// booleans are taken as their JSON text, so `"phone": 9876543210` works.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportPayload {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    /// Local digits, without country code
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub location: Option<String>,
    /// Free-text description of the injury
    #[serde(default, deserialize_with = "scalar_text")]
    pub injury: Option<String>,
}

const SCALAR: &str = "a string, number or boolean";

/// Read any JSON scalar as text. `null` counts as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_)) => Err(de::Error::invalid_type(de::Unexpected::Seq, &SCALAR)),
        Some(Value::Object(_)) => Err(de::Error::invalid_type(de::Unexpected::Map, &SCALAR)),
    }
}

impl ReportPayload {
    /// Apply defaults and phone normalization, producing a complete report.
    pub fn into_report(self) -> NewReport {
        NewReport {
            name: self.name.unwrap_or_else(|| UNKNOWN.to_string()),
            phone: normalize_phone(self.phone.as_deref().unwrap_or_default()),
            species: self.species.unwrap_or_else(|| UNKNOWN.to_string()),
            location: self.location.unwrap_or_default(),
            notes: self.injury.unwrap_or_default(),
        }
    }
}

/// What happened to the confirmation for an ingested report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The provider accepted the message.
    Sent { message_id: String },
    /// No phone number, nothing was sent.
    Skipped,
    /// The send attempt failed. The report is still stored.
    Failed { reason: String },
}

/// Result of a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReceipt {
    pub report_id: i64,
    pub notification: NotificationOutcome,
}

/// Runs the ingestion pipeline against injected collaborators.
#[derive(Clone)]
pub struct Ingestor {
    store: Arc<dyn ReportStore>,
    notifier: Arc<dyn Notifier>,
}

impl Ingestor {
    pub fn new(store: Arc<dyn ReportStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Normalize, persist and confirm one report.
    #[instrument(skip_all)]
    pub async fn ingest(&self, payload: ReportPayload) -> Result<IngestReceipt, WebhookError> {
        let report = payload.into_report();

        info!("Saving report to database");
        let report_id = self.store.insert(&report).await?;
        info!(report_id, "Report saved to database");

        let notification = self.notify(report_id, &report).await;

        Ok(IngestReceipt {
            report_id,
            notification,
        })
    }

    /// Whether confirmations can currently be delivered.
    pub async fn notifier_reachable(&self) -> bool {
        self.notifier.is_reachable().await
    }

    async fn notify(&self, report_id: i64, report: &NewReport) -> NotificationOutcome {
        if report.phone.is_empty() {
            warn!(report_id, "No phone number provided, skipping confirmation");
            return NotificationOutcome::Skipped;
        }

        info!(report_id, phone = %report.phone, "Sending confirmation");
        match self
            .notifier
            .send_confirmation(&report.phone, &report.name, &report.species, &report.location)
            .await
        {
            Ok(message_id) => {
                info!(report_id, message_id = %message_id, "Confirmation sent");
                NotificationOutcome::Sent { message_id }
            }
            Err(e) => {
                let e = WebhookError::from(e);
                error!(report_id, "Failed to send confirmation: {}", e);
                NotificationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
