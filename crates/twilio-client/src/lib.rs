//! Twilio Messages API client.

mod client;
mod error;
mod types;

pub use client::TwilioClient;
pub use error::TwilioError;
pub use types::*;
