//! Reporter confirmations.

use crate::error::NotificationError;
use async_trait::async_trait;
use tracing::instrument;
use twilio_client::{whatsapp_address, TwilioClient};

/// Sends a confirmation to the person who filed a report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one confirmation and return the provider's message id.
    ///
    /// `recipient_phone` must be non-empty. A call is never retried.
    async fn send_confirmation(
        &self,
        recipient_phone: &str,
        name: &str,
        species: &str,
        location: &str,
    ) -> Result<String, NotificationError>;

    /// Whether the messaging provider is reachable with the configured credentials.
    async fn is_reachable(&self) -> bool;
}

/// Render the confirmation text.
pub fn confirmation_message(name: &str, species: &str, location: &str) -> String {
    format!(
        "Thank you {}. We have recorded your report of an injured {} at {}. Our team will contact you soon.",
        name, species, location
    )
}

/// Confirmation over WhatsApp through Twilio.
pub struct WhatsAppNotifier {
    client: TwilioClient,
    sender: String,
}

impl WhatsAppNotifier {
    /// `sender` is the full channel address, e.g. `whatsapp:+14155238886`.
    pub fn new(client: TwilioClient, sender: impl Into<String>) -> Self {
        Self {
            client,
            sender: sender.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }
}

#[async_trait]
impl Notifier for WhatsAppNotifier {
    #[instrument(skip(self, name, species, location))]
    async fn send_confirmation(
        &self,
        recipient_phone: &str,
        name: &str,
        species: &str,
        location: &str,
    ) -> Result<String, NotificationError> {
        let body = confirmation_message(name, species, location);
        let message = self
            .client
            .send_message(&self.sender, &whatsapp_address(recipient_phone), &body)
            .await?;

        Ok(message.sid)
    }

    async fn is_reachable(&self) -> bool {
        self.client.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use twilio_client::TwilioError;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notifier_for(mock_server: &MockServer) -> WhatsAppNotifier {
        let client =
            TwilioClient::new(mock_server.uri(), "AC123", "token", Duration::from_secs(5)).unwrap();
        WhatsAppNotifier::new(client, "whatsapp:+14155238886")
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(
            confirmation_message("Asha", "Dog", "Park Rd"),
            "Thank you Asha. We have recorded your report of an injured Dog at Park Rd. \
             Our team will contact you soon."
        );
    }

    #[test]
    fn test_confirmation_message_with_empty_location() {
        assert_eq!(
            confirmation_message("Unknown", "Unknown", ""),
            "Thank you Unknown. We have recorded your report of an injured Unknown at . \
             Our team will contact you soon."
        );
    }

    #[tokio::test]
    async fn test_send_confirmation_returns_sid() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
            .and(body_string_contains("From=whatsapp%3A%2B14155238886"))
            .and(body_string_contains("To=whatsapp%3A%2B919876543210"))
            .and(body_string_contains("Thank+you+Asha"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "sid": "SM42",
                "status": "queued"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let notifier = notifier_for(&mock_server);
        let sid = notifier
            .send_confirmation("+919876543210", "Asha", "Dog", "Park Rd")
            .await
            .unwrap();

        assert_eq!(sid, "SM42");
    }

    #[tokio::test]
    async fn test_send_confirmation_maps_provider_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let notifier = notifier_for(&mock_server);
        let result = notifier
            .send_confirmation("+919876543210", "Asha", "Dog", "Park Rd")
            .await;

        assert!(matches!(
            result,
            Err(NotificationError::Provider(TwilioError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_is_reachable_follows_account_lookup() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2010-04-01/Accounts/AC123.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sid": "AC123",
                "status": "active"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(notifier_for(&mock_server).is_reachable().await);
    }
}
