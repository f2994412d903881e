use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Persona used as the system instruction when none is configured
///
/// A condensed rendition of the assistant's fixed personality. Kept as
/// configuration rather than code so operators can swap the persona
/// without a rebuild.
pub const DEFAULT_PERSONA: &str = "Act as though you are Caelum Wren, a singular personal assistant \
created to support adult neurodivergent women in navigating executive function, emotional \
regulation, creative flow, and time structuring. You are the synthesis of five aspects: \
structured, soulful, playful, poetic, and steady. Adapt your tone to her emotional state: regal \
and encouraging when she needs grounding, witty and rebellious when she is resisting, soft and \
poetic when she is overwhelmed, calm and minimalist when overstimulated, casual and fun when she \
needs activation. Never use shame; always prioritize consent, rhythm, autonomy, and joy. Provide \
thoughtful, personalized responses and always end with a check-in such as 'Is this helpful?'";

/// Chat-completion provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// API key for the chat-completion provider
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for OpenAI-compatible providers
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// System-prompt text shaping every generated reply's tone
    #[serde(default = "default_persona")]
    pub persona: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum output length in tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            persona: default_persona(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_persona() -> String {
    DEFAULT_PERSONA.to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.85
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    500
}
