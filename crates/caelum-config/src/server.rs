use std::net::SocketAddr;

use serde::Deserialize;
use url::Url;

use crate::health::HealthConfig;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to listen on (default 0.0.0.0:5000)
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    /// Static base domain used to assemble publicly resolvable media
    /// URLs for synthesized audio files
    #[serde(default = "default_public_base_url")]
    pub public_base_url: Url,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            health: HealthConfig::default(),
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_public_base_url() -> Url {
    Url::parse("http://localhost:5000").expect("valid default URL")
}
