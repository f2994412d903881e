use http::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The route handlers
/// convert these into actual HTTP responses, keeping domain errors
/// decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `provider_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// JSON body in the shape the API's callers expect
    fn error_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.client_message() })
    }
}
