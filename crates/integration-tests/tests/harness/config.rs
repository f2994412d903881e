//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use caelum_config::{Config, HealthConfig, LlmConfig, MessagingConfig, ServerConfig, TtsConfig};
use secrecy::SecretString;
use url::Url;

/// Base URL under which media links are assembled in tests
pub const PUBLIC_BASE_URL: &str = "https://assistant.example.com";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    public_base_url: Url::parse(PUBLIC_BASE_URL).expect("valid URL"),
                },
                llm: LlmConfig::default(),
                tts: TtsConfig::default(),
                // Credentials are required at construction even when a
                // test never dispatches
                messaging: MessagingConfig {
                    account_sid: "AC00000000000000000000000000000000".to_owned(),
                    auth_token: Some(SecretString::from("test-token")),
                    from_number: "+15550000000".to_owned(),
                    base_url: None,
                    status_callback: None,
                },
                broadcast: None,
                voices: indexmap::IndexMap::new(),
            },
        }
    }

    /// Point the chat-completion provider at a mock backend
    pub fn with_llm(mut self, base_url: &str) -> Self {
        self.config.llm.api_key = Some(SecretString::from("test-key"));
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the synthesis endpoint at a mock backend, writing audio
    /// files into the given directory
    pub fn with_tts(mut self, base_url: &str, output_dir: &Path) -> Self {
        self.config.tts.base_url = Some(base_url.parse().expect("valid URL"));
        self.config.tts.output_dir = output_dir.to_path_buf();
        self
    }

    /// Write audio files into the given directory without touching the
    /// synthesis endpoint
    pub fn with_output_dir(mut self, output_dir: &Path) -> Self {
        self.config.tts.output_dir = output_dir.to_path_buf();
        self
    }

    /// Point the messaging provider at a mock backend
    pub fn with_messaging(mut self, base_url: &str) -> Self {
        self.config.messaging.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
