use caelum_config::MessagingConfig;
use caelum_core::http_client;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::DispatchError;

/// Default messaging API base URL
const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// An ephemeral outbound message, constructed per request
///
/// At least one of `body`/`media_url` must be set; the provider, not
/// this client, enforces that.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    /// Recipient phone number
    pub recipient: String,
    /// Text body
    pub body: Option<String>,
    /// Publicly resolvable media URL to attach
    pub media_url: Option<String>,
    /// Delivery-status callback URL for this message
    pub status_callback: Option<Url>,
}

impl OutboundMessage {
    /// Text-only message
    pub fn text(recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            body: Some(body.into()),
            media_url: None,
            status_callback: None,
        }
    }

    /// Media-only message
    pub fn media(recipient: impl Into<String>, media_url: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            body: None,
            media_url: None,
            status_callback: None,
        }
        .with_media_url(media_url)
    }

    /// Attach a media URL
    #[must_use]
    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }

    /// Register a delivery-status callback for this message
    #[must_use]
    pub fn with_status_callback(mut self, url: Url) -> Self {
        self.status_callback = Some(url);
        self
    }
}

/// Provider acknowledgement for a sent message
#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Messaging API client (Twilio-style REST)
pub struct Dispatcher {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: SecretString,
    from_number: String,
}

impl Dispatcher {
    /// Create from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the auth token is missing
    pub fn from_config(config: &MessagingConfig) -> anyhow::Result<Self> {
        let auth_token = config
            .auth_token
            .clone()
            .ok_or_else(|| anyhow::anyhow!("messaging.auth_token is required"))?;

        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_owned(), |url| url.as_str().to_owned());

        Ok(Self {
            client: http_client(),
            base_url,
            account_sid: config.account_sid.clone(),
            auth_token,
            from_number: config.from_number.clone(),
        })
    }

    fn messages_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/2010-04-01/Accounts/{}/Messages.json", self.account_sid)
    }

    /// Form parameters for the provider's send API
    fn form_params(&self, message: &OutboundMessage) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("To", message.recipient.clone()),
            ("From", self.from_number.clone()),
        ];
        if let Some(ref body) = message.body {
            params.push(("Body", body.clone()));
        }
        if let Some(ref media_url) = message.media_url {
            params.push(("MediaUrl", media_url.clone()));
        }
        if let Some(ref callback) = message.status_callback {
            params.push(("StatusCallback", callback.to_string()));
        }
        params
    }

    /// Send one message, returning the provider-assigned identifier
    ///
    /// A single attempt; the caller decides whether a failure is logged,
    /// surfaced, or dropped. Delivery itself is asynchronous — the
    /// provider reports it later through the status callback.
    pub async fn send(&self, message: &OutboundMessage) -> Result<String, DispatchError> {
        tracing::debug!(
            recipient = %message.recipient,
            has_body = message.body.is_some(),
            has_media = message.media_url.is_some(),
            "dispatching message"
        );

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&self.form_params(message))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "messaging request failed");
                DispatchError::Connection(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_owned());
            tracing::warn!(status = %status, "messaging provider rejected message");
            return Err(DispatchError::Provider {
                status: status.as_u16(),
                message: message_text,
            });
        }

        let acknowledgement: MessageResponse = response
            .json()
            .await
            .map_err(|e| DispatchError::InvalidResponse(e.to_string()))?;

        tracing::debug!(sid = %acknowledgement.sid, "message accepted by provider");

        Ok(acknowledgement.sid)
    }
}
