//! Wildlife injury report webhook.
//!
//! Receives reports posted by a conversational voice agent, stores them,
//! and confirms receipt to the reporter over WhatsApp:
//! - Missing fields are defaulted and the phone number normalized up front
//! - Reports are persisted before any message is sent
//! - A failed confirmation never fails the request once the report is stored

pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod notifier;
pub mod phone;

pub use config::Config;
pub use error::{NotificationError, WebhookError};
pub use ingest::{IngestReceipt, Ingestor, NotificationOutcome, ReportPayload};
pub use notifier::{Notifier, WhatsAppNotifier};
pub use phone::normalize_phone;
