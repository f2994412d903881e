use caelum_config::LlmConfig;
use caelum_core::http_client;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::error::GenerationError;
use crate::protocol::{ChatMessage, ChatRequest, ChatResponse};

/// Default OpenAI-compatible API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completion client with a fixed persona system prompt
pub struct Generator {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    persona: String,
    temperature: f64,
    max_tokens: u32,
}

impl Generator {
    /// Create from provider configuration
    pub fn from_config(config: &LlmConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_owned(), |url| url.as_str().to_owned());

        Self {
            client: http_client(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            persona: config.persona.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// The persona text used when no system prompt override is given
    pub fn persona(&self) -> &str {
        &self.persona
    }

    fn completions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    /// Generate a reply for a user utterance
    ///
    /// Issues one chat-completion call with a two-message context: the
    /// persona (or the given override) as the system instruction and the
    /// utterance as the user message. Returns the top choice's text.
    pub async fn generate_reply(
        &self,
        user_text: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        let system = system_prompt.unwrap_or(&self.persona);

        tracing::debug!(model = %self.model, input_len = user_text.len(), "generating reply");

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut builder = self.client.post(self.completions_url()).json(&body);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "chat-completion request failed");
            GenerationError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_owned());
            tracing::warn!(status = %status, "chat-completion provider returned error");
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyCompletion)
    }
}
