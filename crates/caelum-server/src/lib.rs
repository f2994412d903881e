//! HTTP server assembly for the Caelum gateway

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod health;
mod index;
mod webhook;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use caelum_config::Config;
use caelum_core::VoiceMap;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    voices: Arc<VoiceMap>,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Initializes the generator, synthesizer, and dispatcher, wires
    /// all routes, and starts the broadcast tasks when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio output directory cannot be created
    /// or the messaging dispatcher cannot be constructed
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let generator = caelum_llm::build_generator(&config);
        let synthesizer = caelum_tts::build_synthesizer(&config)?;
        let dispatcher = caelum_messaging::build_dispatcher(&config)?;

        // Administrative lookup table; seeded at startup, not consulted
        // by any route yet
        let voices = Arc::new(VoiceMap::new(config.voices));

        let webhook_state = webhook::WebhookState {
            generator: Arc::clone(&generator),
            synthesizer: Arc::clone(&synthesizer),
            dispatcher: Arc::clone(&dispatcher),
            public_base_url: config.server.public_base_url.clone(),
        };

        let mut app = Router::new()
            .route("/", axum::routing::get(index::index_handler))
            .route("/webhook", axum::routing::post(webhook::webhook_handler).with_state(webhook_state));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(caelum_llm::endpoint_router().with_state(generator));
        app = app.merge(caelum_tts::endpoint_router().with_state(Arc::clone(&synthesizer)));
        app = app.merge(caelum_messaging::endpoint_router());

        // Generated audio must be publicly fetchable so the messaging
        // provider can download media URLs
        app = app.nest_service("/static/audio", ServeDir::new(synthesizer.output_dir()));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref broadcast_config) = config.broadcast {
            let context = Arc::new(caelum_broadcast::BroadcastContext {
                synthesizer: Arc::clone(&synthesizer),
                dispatcher,
                public_base_url: config.server.public_base_url.clone(),
                recipient: broadcast_config.recipient.clone(),
                status_callback: config.messaging.status_callback.clone(),
            });
            caelum_broadcast::start_broadcasts(context, caelum_broadcast::jobs(broadcast_config));
        }

        Ok(Self {
            router: app,
            listen_address,
            voices,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// The administratively mutable voice lookup table
    pub fn voices(&self) -> Arc<VoiceMap> {
        Arc::clone(&self.voices)
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
