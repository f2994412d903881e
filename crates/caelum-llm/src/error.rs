use caelum_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors from the chat-completion provider
///
/// Every variant is terminal: the policy is at most one attempt per
/// call, with callers supplying a fallback message to the end user.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Request never reached the provider
    #[error("failed to reach chat-completion provider: {0}")]
    Connection(String),

    /// Provider rejected or failed the request
    #[error("chat-completion provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// Provider response could not be decoded
    #[error("malformed chat-completion response: {0}")]
    InvalidResponse(String),

    /// Provider returned no completion choices
    #[error("chat-completion response contained no choices")]
    EmptyCompletion,
}

impl HttpError for GenerationError {
    fn status_code(&self) -> StatusCode {
        // The API contract is a plain 500 for any generation failure
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Connection(_) => "connection_error",
            Self::Provider { .. } => "provider_error",
            Self::InvalidResponse(_) | Self::EmptyCompletion => "invalid_response_error",
        }
    }

    fn client_message(&self) -> String {
        "Error generating response".to_owned()
    }
}
