//! Response generation for the Caelum gateway
//!
//! Wraps a single OpenAI-compatible chat-completion call behind a fixed
//! persona system prompt. One attempt per call, no retries.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod generator;
mod protocol;

use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse, routing::post};
use caelum_core::{ExtractJson, HttpError};
use serde::Deserialize;

pub use error::GenerationError;
pub use generator::Generator;

/// Build the response generator from configuration
pub fn build_generator(config: &caelum_config::Config) -> Arc<Generator> {
    Arc::new(Generator::from_config(&config.llm))
}

/// Create the endpoint router for generic prompt requests
pub fn endpoint_router() -> Router<Arc<Generator>> {
    Router::new().route("/llm", post(generate))
}

#[derive(Debug, Deserialize)]
struct PromptRequest {
    #[serde(default)]
    prompt: String,
}

/// Handle a generic prompt: plain-text reply on success, JSON error
/// body on provider failure
async fn generate(
    State(generator): State<Arc<Generator>>,
    ExtractJson(request): ExtractJson<PromptRequest>,
) -> axum::response::Response {
    if request.prompt.trim().is_empty() {
        return (http::StatusCode::BAD_REQUEST, "No prompt provided").into_response();
    }

    match generator.generate_reply(&request.prompt, None).await {
        Ok(reply) => (
            [(http::header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            reply,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "prompt generation failed");
            (e.status_code(), axum::Json(e.error_body())).into_response()
        }
    }
}
