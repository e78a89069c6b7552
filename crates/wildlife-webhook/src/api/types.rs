//! API response types.

use serde::Serialize;

/// Acknowledgment returned once a report is stored.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: String,
}

impl WebhookResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub messaging_api_healthy: bool,
}
