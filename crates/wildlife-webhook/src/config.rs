//! Configuration for the report webhook.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Webhook configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Report storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Twilio messaging configuration
    #[serde(default)]
    pub twilio: TwilioConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    /// Enable persistence (if false, reports are kept in memory only)
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Clone, Deserialize)]
pub struct TwilioConfig {
    /// Account SID used as the basic-auth user
    #[serde(default)]
    pub account_sid: String,

    /// Auth token used as the basic-auth password
    #[serde(default)]
    pub auth_token: String,

    /// Twilio REST API base URL
    #[serde(default = "default_twilio_api_url")]
    pub api_url: String,

    /// Originating channel address for confirmations
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Outbound request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl TwilioConfig {
    /// Whether both credentials are present.
    pub fn has_credentials(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }
}

// Keep the auth token out of debug output
impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("sender", &self.sender)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            persist: true,
        }
    }
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            api_url: default_twilio_api_url(),
            sender: default_sender(),
            timeout: default_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8888
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("reports.db")
}

fn default_true() -> bool {
    true
}

fn default_twilio_api_url() -> String {
    "https://api.twilio.com".into()
}

fn default_sender() -> String {
    // Twilio WhatsApp sandbox number
    "whatsapp:+14155238886".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(config::Environment::default().separator("__"))
    }

    fn from_source(source: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(source.try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
