//! Error types for the report webhook.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Webhook error types.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Storage error: {0}")]
    Storage(#[from] report_store::StoreError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),
}

/// Failure to deliver a confirmation.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error(transparent)]
    Provider(#[from] twilio_client::TwilioError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl WebhookError {
    /// Message safe to return to the caller.
    ///
    /// Storage and provider details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            WebhookError::InvalidPayload(_) => self.to_string(),
            WebhookError::Storage(_) => "Failed to store report".to_string(),
            WebhookError::Notification(_) => "Failed to send confirmation".to_string(),
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            WebhookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebhookError::Notification(_) => StatusCode::BAD_GATEWAY,
        };

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
