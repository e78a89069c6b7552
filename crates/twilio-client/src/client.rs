//! Twilio REST HTTP client.

use crate::error::TwilioError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const API_VERSION: &str = "2010-04-01";

/// Twilio Messages API client.
///
/// The auth token is stored using `SecretString` so it never shows up in
/// logs or debug output.
#[derive(Clone)]
pub struct TwilioClient {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: SecretString,
}

impl TwilioClient {
    /// Create a new Twilio client.
    pub fn new(
        base_url: impl Into<String>,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TwilioError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account_sid: account_sid.into(),
            auth_token: SecretString::new(auth_token.into()),
        })
    }

    fn account_url(&self) -> String {
        format!(
            "{}/{}/Accounts/{}",
            self.base_url, API_VERSION, self.account_sid
        )
    }

    /// Check that the API is reachable and the credentials are accepted.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}.json", self.account_url()))
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Send a message from `from` to `to`.
    ///
    /// Both addresses carry their channel prefix (e.g. `whatsapp:+14155238886`).
    /// Each call creates exactly one message; nothing is retried.
    #[instrument(skip(self, body))]
    pub async fn send_message(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<MessageResource, TwilioError> {
        let request = CreateMessageRequest {
            from: from.to_string(),
            to: to.to_string(),
            body: body.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/Messages.json", self.account_url()))
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&request)
            .send()
            .await?;

        let message: MessageResource = self.handle_response(response).await?;
        debug!(sid = %message.sid, status = ?message.status, "Message accepted");
        Ok(message)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TwilioError> {
        if response.status().is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(TwilioError::from)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    async fn extract_error(&self, response: reqwest::Response) -> TwilioError {
        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("Twilio authentication failed");
                TwilioError::Unauthorized
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Twilio rate limit exceeded");
                TwilioError::RateLimit
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                let (code, message) = match serde_json::from_str::<ApiErrorBody>(&text) {
                    Ok(body) => (body.code, body.message),
                    Err(_) => (None, text),
                };
                warn!(status = %status, code = ?code, "Twilio request failed: {}", message);
                TwilioError::Api {
                    status: status.as_u16(),
                    code,
                    message,
                }
            }
        }
    }
}
