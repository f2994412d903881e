//! Shared types for the Caelum gateway feature crates

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod extract;
mod http_client;
mod voice;

pub use error::HttpError;
pub use extract::ExtractJson;
pub use http_client::http_client;
pub use voice::VoiceMap;
