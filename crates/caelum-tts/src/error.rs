use caelum_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors from speech synthesis
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Nothing to synthesize
    #[error("no text provided")]
    EmptyInput,

    /// Request never reached the synthesis provider
    #[error("failed to reach synthesis provider: {0}")]
    Connection(String),

    /// Provider rejected or failed the request
    #[error("synthesis provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// Writing the audio file failed (disk full, permissions)
    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpError for SynthesisError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput => StatusCode::BAD_REQUEST,
            Self::Connection(_) | Self::Provider { .. } | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::EmptyInput => "invalid_request_error",
            Self::Connection(_) => "connection_error",
            Self::Provider { .. } => "provider_error",
            Self::Io(_) => "io_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
