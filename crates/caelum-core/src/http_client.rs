use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Client;

/// Upper bound on any single provider call; synthesizing a long reply
/// is the slowest thing this service does
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Shared HTTP client for all outbound provider calls
///
/// One pooled client across the generator, synthesizer, and dispatcher
/// so connections to each provider are reused between requests.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .pool_idle_timeout(Duration::from_secs(5))
                .tcp_nodelay(true)
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .expect("failed to build default HTTP client")
        })
        .clone()
}
