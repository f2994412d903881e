use thiserror::Error;

/// Errors from the messaging provider
///
/// Never mapped to an HTTP response: the webhook absorbs dispatch
/// failures and the broadcast runner only logs them.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Request never reached the provider
    #[error("failed to reach messaging provider: {0}")]
    Connection(String),

    /// Provider rejected the message (invalid number, unverified
    /// sender, rate limit)
    #[error("messaging provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// Provider response could not be decoded
    #[error("malformed messaging provider response: {0}")]
    InvalidResponse(String),
}
