//! Speech synthesis for the Caelum gateway
//!
//! Converts text into MP3 files on local storage via a third-party
//! synthesis endpoint, and serves the `/tts-stream` and `/tts-download`
//! routes.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod synthesizer;

use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse, routing::post};
use caelum_core::{ExtractJson, HttpError};
use serde::Deserialize;

pub use error::SynthesisError;
pub use synthesizer::{Synthesizer, media_url};

/// Build the synthesizer from configuration, creating the output
/// directory if it does not exist
pub fn build_synthesizer(config: &caelum_config::Config) -> anyhow::Result<Arc<Synthesizer>> {
    std::fs::create_dir_all(&config.tts.output_dir).map_err(|e| {
        anyhow::anyhow!(
            "failed to create audio output directory {}: {e}",
            config.tts.output_dir.display()
        )
    })?;

    Ok(Arc::new(Synthesizer::from_config(&config.tts)))
}

/// Create the endpoint router for text-to-speech requests
pub fn endpoint_router() -> Router<Arc<Synthesizer>> {
    Router::new()
        .route("/tts-stream", post(synthesize_to_path))
        .route("/tts-download", post(synthesize_to_download))
}

#[derive(Debug, Deserialize)]
struct SpeechRequest {
    #[serde(default)]
    text: String,
}

/// Synthesize and return the generated file's path
async fn synthesize_to_path(
    State(synthesizer): State<Arc<Synthesizer>>,
    ExtractJson(request): ExtractJson<SpeechRequest>,
) -> axum::response::Response {
    match synthesizer.synthesize(&request.text).await {
        Ok(path) => axum::Json(serde_json::json!({ "audio_file": path.display().to_string() })).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Synthesize and return the MP3 bytes as an attachment
async fn synthesize_to_download(
    State(synthesizer): State<Arc<Synthesizer>>,
    ExtractJson(request): ExtractJson<SpeechRequest>,
) -> axum::response::Response {
    let path = match synthesizer.synthesize(&request.text).await {
        Ok(path) => path,
        Err(e) => return error_response(&e),
    };

    let audio = match tokio::fs::read(&path).await {
        Ok(audio) => audio,
        Err(e) => return error_response(&SynthesisError::from(e)),
    };

    let filename = path.file_name().map(|name| name.to_string_lossy().into_owned());
    let disposition = filename.map_or_else(
        || "attachment".to_owned(),
        |name| format!("attachment; filename=\"{name}\""),
    );

    (
        [
            (http::header::CONTENT_TYPE, "audio/mpeg".to_owned()),
            (http::header::CONTENT_DISPOSITION, disposition),
        ],
        audio,
    )
        .into_response()
}

fn error_response(e: &SynthesisError) -> axum::response::Response {
    tracing::error!(error = %e, "speech synthesis failed");
    (e.status_code(), axum::Json(e.error_body())).into_response()
}
