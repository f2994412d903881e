use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Messaging provider (Twilio-style REST API) configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagingConfig {
    /// Account identifier
    #[serde(default)]
    pub account_sid: String,
    /// API auth token
    #[serde(default)]
    pub auth_token: Option<SecretString>,
    /// Sender phone number for all outbound messages
    #[serde(default)]
    pub from_number: String,
    /// Base URL override for the messaging API
    #[serde(default)]
    pub base_url: Option<Url>,
    /// URL the provider calls back with delivery-status events
    #[serde(default)]
    pub status_callback: Option<Url>,
}
