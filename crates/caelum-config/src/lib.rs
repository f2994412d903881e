//! Configuration for the Caelum gateway
//!
//! Loaded from a TOML file with `{{ env.VAR }}` placeholder expansion,
//! then validated before the server starts.

#![allow(clippy::must_use_candidate)]

pub mod broadcast;
mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod messaging;
pub mod server;
pub mod tts;

use indexmap::IndexMap;
use serde::Deserialize;

pub use broadcast::BroadcastConfig;
pub use health::HealthConfig;
pub use llm::LlmConfig;
pub use messaging::MessagingConfig;
pub use server::ServerConfig;
pub use tts::TtsConfig;

/// Top-level Caelum configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Chat-completion provider configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Speech synthesis configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Messaging provider configuration
    #[serde(default)]
    pub messaging: MessagingConfig,
    /// Scheduled broadcast configuration; tasks start only when present
    #[serde(default)]
    pub broadcast: Option<BroadcastConfig>,
    /// Voice name to provider voice identifier mappings
    #[serde(default = "default_voices")]
    pub voices: IndexMap<String, String>,
}

/// Built-in voice mappings, kept for the administrative lookup table
fn default_voices() -> IndexMap<String, String> {
    let mut voices = IndexMap::new();
    voices.insert("Beau".to_owned(), "21m00Tcm4TlvDq8ikWAM".to_owned());
    voices.insert("Fox".to_owned(), "TxGEqnHWrfWFTfGW9XjX".to_owned());
    voices.insert("Jasper".to_owned(), "AZnzlk1XvdvUeBnXmlld".to_owned());
    voices.insert("Orion".to_owned(), "EXAVITQu4vr4xnSDxMaL".to_owned());
    voices.insert("Theo".to_owned(), "MF3mGyEYCl7XYWbV9V6O".to_owned());
    voices
}
