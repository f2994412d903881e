use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

/// Speech synthesis configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Directory where generated MP3 files are written
    ///
    /// Created at startup if missing. Files accumulate without expiry;
    /// retention is an operational concern outside this service.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Synthesis language code
    #[serde(default = "default_language")]
    pub language: String,
    /// Base URL override for the synthesis endpoint
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            language: default_language(),
            base_url: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("static/audio")
}

fn default_language() -> String {
    "en".to_string()
}
