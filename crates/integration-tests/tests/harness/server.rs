//! Runs the assembled Caelum router on an ephemeral port

use std::net::SocketAddr;

use caelum_config::Config;
use caelum_server::Server;
use tokio_util::sync::CancellationToken;

/// A running server instance plus the client the tests talk to it with
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Build the server from `config` and serve it on a port of the
    /// OS's choosing
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(config).await?;

        // Bind here rather than through Server::serve so the assigned
        // port is known before any request is made
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Absolute URL for a path on the running server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
