//! Twilio Messages API types.

use serde::{Deserialize, Serialize};

/// Address prefix selecting the WhatsApp channel.
pub const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Form body for creating a message.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Body")]
    pub body: String,
}

/// Message resource returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    /// Provider-assigned message identifier
    pub sid: String,
    pub status: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub error_code: Option<i64>,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<u32>,
    pub message: String,
    pub more_info: Option<String>,
}

/// Address a phone number on the WhatsApp channel.
pub fn whatsapp_address(phone_number: &str) -> String {
    format!("{}{}", WHATSAPP_PREFIX, phone_number)
}
