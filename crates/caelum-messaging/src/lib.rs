//! Outbound messaging for the Caelum gateway
//!
//! Wraps a Twilio-style send API and serves the `/status` endpoint the
//! provider calls back with asynchronous delivery outcomes.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod dispatcher;
mod error;

use std::sync::Arc;

use axum::{Form, Router, routing::post};
use serde::Deserialize;

pub use dispatcher::{Dispatcher, OutboundMessage};
pub use error::DispatchError;

/// Build the dispatcher from configuration
pub fn build_dispatcher(config: &caelum_config::Config) -> anyhow::Result<Arc<Dispatcher>> {
    Ok(Arc::new(Dispatcher::from_config(&config.messaging)?))
}

/// Create the endpoint router for delivery-status callbacks
pub fn endpoint_router() -> Router {
    Router::new().route("/status", post(status_callback))
}

/// Delivery-status event posted by the messaging provider
#[derive(Debug, Deserialize)]
struct StatusUpdate {
    #[serde(rename = "MessageSid", default)]
    message_sid: String,
    #[serde(rename = "MessageStatus", default)]
    message_status: String,
    #[serde(rename = "ErrorCode", default)]
    error_code: Option<String>,
    #[serde(rename = "ErrorMessage", default)]
    error_message: Option<String>,
}

/// Record the delivery outcome; no processing beyond logging
async fn status_callback(Form(update): Form<StatusUpdate>) -> (http::StatusCode, &'static str) {
    tracing::info!(
        sid = %update.message_sid,
        status = %update.message_status,
        error_code = update.error_code.as_deref().unwrap_or("-"),
        error_message = update.error_message.as_deref().unwrap_or("-"),
        "delivery status update"
    );

    (http::StatusCode::OK, "Status received")
}
