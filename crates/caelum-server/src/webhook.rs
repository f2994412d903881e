//! Inbound message webhook
//!
//! The orchestration point: reply generation, audio synthesis, and the
//! two outbound dispatches. The calling provider expects a fast,
//! always-200 acknowledgement, so provider failures past generation are
//! logged and absorbed, never surfaced.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::IntoResponse;
use caelum_llm::Generator;
use caelum_messaging::{Dispatcher, OutboundMessage};
use caelum_tts::{Synthesizer, media_url};
use serde::Deserialize;
use url::Url;

/// Empty TwiML acknowledgement returned for every inbound message
const EMPTY_TWIML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response></Response>";

/// Substitute reply when generation fails
const FALLBACK_REPLY: &str = "I am sorry, I could not process your request.";

#[derive(Clone)]
pub struct WebhookState {
    pub generator: Arc<Generator>,
    pub synthesizer: Arc<Synthesizer>,
    pub dispatcher: Arc<Dispatcher>,
    pub public_base_url: Url,
}

/// Inbound message event, form-encoded per the messaging provider's
/// webhook convention
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "From", default)]
    from: String,
    #[serde(rename = "Body", default)]
    body: String,
}

/// Handle one inbound message
///
/// Generation failure degrades to the fixed apology; synthesis and
/// dispatch failures are logged and skipped. The response is always the
/// empty TwiML document with a 200.
pub async fn webhook_handler(
    State(state): State<WebhookState>,
    Form(inbound): Form<InboundMessage>,
) -> axum::response::Response {
    tracing::info!(sender = %inbound.from, body_len = inbound.body.len(), "inbound message received");

    let reply = match state.generator.generate_reply(&inbound.body, None).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "reply generation failed, using fallback");
            FALLBACK_REPLY.to_owned()
        }
    };

    let audio_url = match state.synthesizer.synthesize(&reply).await {
        Ok(path) => Some(media_url(&state.public_base_url, &path)),
        Err(e) => {
            tracing::error!(error = %e, "reply synthesis failed, skipping audio message");
            None
        }
    };

    let text_message = OutboundMessage::text(inbound.from.clone(), reply);
    if let Err(e) = state.dispatcher.send(&text_message).await {
        tracing::error!(error = %e, "failed to dispatch text reply");
    }

    if let Some(audio_url) = audio_url {
        let audio_message = OutboundMessage::media(inbound.from.clone(), audio_url);
        if let Err(e) = state.dispatcher.send(&audio_message).await {
            tracing::error!(error = %e, "failed to dispatch audio reply");
        }
    }

    ([(http::header::CONTENT_TYPE, "application/xml")], EMPTY_TWIML).into_response()
}
