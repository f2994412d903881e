//! Mock speech-synthesis backend for integration tests
//!
//! Answers every GET with a small fake MP3 payload, or with 500 when
//! started in failing mode.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Bytes served as synthesized audio
pub const FAKE_MP3: &[u8] = b"ID3\x03\x00fake-mp3-payload";

pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    request_count: AtomicU32,
    fail: bool,
}

impl MockTts {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false).await
    }

    /// Start a mock that fails every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(true).await
    }

    async fn start_inner(fail: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            request_count: AtomicU32::new(0),
            fail,
        });

        let app = Router::new()
            .route("/translate_tts", routing::get(handle_synthesis))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the synthesis endpoint
    pub fn base_url(&self) -> String {
        format!("http://{}/translate_tts", self.addr)
    }

    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_synthesis(State(state): State<Arc<MockTtsState>>) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    if state.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock synthesis failure").into_response();
    }

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "audio/mpeg")],
        FAKE_MP3,
    )
        .into_response()
}
