//! HTTP request handlers.

use super::types::{HealthResponse, WebhookResponse};
use super::AppState;
use crate::error::WebhookError;
use crate::ingest::ReportPayload;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, error, info};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let messaging_healthy = state.ingestor.notifier_reachable().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        messaging_api_healthy: messaging_healthy,
    })
}

/// Receive a report from the voice agent.
///
/// Responds with success once the report is stored, whether or not the
/// confirmation message went out.
pub async fn receive_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportPayload>, JsonRejection>,
) -> Result<Json<WebhookResponse>, WebhookError> {
    info!("Webhook called");

    let result = match payload {
        Ok(Json(payload)) => {
            debug!(?payload, "Incoming data");
            state.ingestor.ingest(payload).await
        }
        Err(rejection) => Err(WebhookError::InvalidPayload(rejection.body_text())),
    };

    match result {
        Ok(receipt) => {
            info!(
                report_id = receipt.report_id,
                notification = ?receipt.notification,
                "Report processed"
            );
            Ok(Json(WebhookResponse::success()))
        }
        Err(e) => {
            error!("Error processing webhook: {:?}", e);
            Err(e)
        }
    }
}
