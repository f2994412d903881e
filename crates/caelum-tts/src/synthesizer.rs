use std::path::{Path, PathBuf};

use caelum_config::TtsConfig;
use caelum_core::http_client;
use reqwest::Client;
use url::Url;
use uuid::Uuid;

use crate::error::SynthesisError;

/// Default synthesis endpoint (the free Google Translate TTS path)
const DEFAULT_BASE_URL: &str = "https://translate.google.com/translate_tts";

/// Speech synthesizer writing one MP3 file per call
///
/// Files are never overwritten or deleted; the output directory grows
/// without bound. Retention is a documented operational gap, not
/// something this service manages.
pub struct Synthesizer {
    client: Client,
    base_url: String,
    language: String,
    output_dir: PathBuf,
}

impl Synthesizer {
    /// Create from configuration; the output directory must already exist
    pub fn from_config(config: &TtsConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or_else(|| DEFAULT_BASE_URL.to_owned(), |url| url.as_str().to_owned());

        Self {
            client: http_client(),
            base_url,
            language: config.language.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    /// Directory where generated files land
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Synthesize text into a new MP3 file, returning its absolute path
    ///
    /// Exactly one new, uniquely named file per call.
    pub async fn synthesize(&self, text: &str) -> Result<PathBuf, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyInput);
        }

        tracing::debug!(input_len = text.len(), language = %self.language, "synthesizing speech");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", &self.language),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "synthesis request failed");
                SynthesisError::Connection(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_owned());
            tracing::warn!(status = %status, "synthesis provider returned error");
            return Err(SynthesisError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Connection(e.to_string()))?;

        let path = self.output_dir.join(unique_filename());
        tokio::fs::write(&path, &audio).await?;

        tracing::debug!(path = %path.display(), bytes = audio.len(), "audio file written");

        Ok(std::path::absolute(&path).unwrap_or(path))
    }
}

/// Generate a collision-free file name from the current timestamp and a
/// random token
fn unique_filename() -> String {
    let millis = jiff::Timestamp::now().as_millisecond();
    format!("gtts_{millis}_{}.mp3", Uuid::new_v4().simple())
}

/// Assemble the publicly resolvable URL for a generated audio file
///
/// Joins the configured static base domain with the file's name under
/// the fixed `/static/audio/` prefix.
pub fn media_url(public_base_url: &Url, audio_path: &Path) -> String {
    let filename = audio_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let base = public_base_url.as_str().trim_end_matches('/');
    format!("{base}/static/audio/{filename}")
}
