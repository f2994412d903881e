//! Mock messaging provider for integration tests
//!
//! Implements the Messages endpoint of a Twilio-compatible REST API,
//! recording every dispatched message for later assertions.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock messaging backend that records outbound messages
pub struct MockMessaging {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockMessagingState>,
}

struct MockMessagingState {
    sent: Mutex<Vec<SentMessage>>,
    fail: bool,
}

/// One recorded message creation request
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub account_sid: String,
    pub params: HashMap<String, String>,
}

impl SentMessage {
    pub fn to(&self) -> Option<&str> {
        self.params.get("To").map(String::as_str)
    }

    pub fn from(&self) -> Option<&str> {
        self.params.get("From").map(String::as_str)
    }

    pub fn body(&self) -> Option<&str> {
        self.params.get("Body").map(String::as_str)
    }

    pub fn media_url(&self) -> Option<&str> {
        self.params.get("MediaUrl").map(String::as_str)
    }

    pub fn status_callback(&self) -> Option<&str> {
        self.params.get("StatusCallback").map(String::as_str)
    }
}

impl MockMessaging {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false).await
    }

    /// Start a mock that rejects every message with 401
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(true).await
    }

    async fn start_inner(fail: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockMessagingState {
            sent: Mutex::new(Vec::new()),
            fail,
        });

        let app = Router::new()
            .route(
                "/2010-04-01/Accounts/{account_sid}/Messages.json",
                routing::post(handle_create_message),
            )
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

    /// Base URL for configuring the mock as the messaging provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All messages received so far, in arrival order
    pub fn sent(&self) -> Vec<SentMessage> {
        self.state.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.state.sent.lock().unwrap().len()
    }
}

impl Drop for MockMessaging {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_create_message(
    State(state): State<Arc<MockMessagingState>>,
    Path(account_sid): Path<String>,
    Form(params): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    if state.fail {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": 20003,
                "message": "Authentication Error - invalid username",
                "status": 401
            })),
        )
            .into_response();
    }

    let index = {
        let mut sent = state.sent.lock().unwrap();
        sent.push(SentMessage { account_sid, params });
        sent.len()
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "sid": format!("SM{index:032x}"),
            "status": "queued"
        })),
    )
        .into_response()
}
