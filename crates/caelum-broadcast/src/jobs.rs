use std::sync::Arc;

use caelum_config::BroadcastConfig;
use caelum_messaging::{DispatchError, Dispatcher, OutboundMessage};
use caelum_tts::{SynthesisError, Synthesizer, media_url};
use thiserror::Error;
use url::Url;

use crate::schedule::Schedule;

const MORNING_AFFIRMATION: &str = "Good morning! You are capable, resilient, and ready to seize the day!";

const EVENING_REFLECTION: &str = "Good evening. Take a moment to reflect on your day, celebrate your \
victories, and learn from your challenges.";

const FOCUS_SUGGESTION: &str = "This is your moment for focused self-improvement. Consider spending \
15 minutes in quiet reflection, reading an inspiring article, or planning your next step towards a \
better tomorrow.";

/// A broadcast job failed in one of its two steps
#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Everything a broadcast job needs to run
pub struct BroadcastContext {
    pub synthesizer: Arc<Synthesizer>,
    pub dispatcher: Arc<Dispatcher>,
    /// Static base domain for assembling media URLs
    pub public_base_url: Url,
    /// Recipient of every broadcast
    pub recipient: String,
    /// Delivery-status callback registered on each broadcast
    pub status_callback: Option<Url>,
}

/// One timer-triggered broadcast: a fixed text, spoken and sent
#[derive(Debug, Clone, Copy)]
pub struct BroadcastJob {
    pub name: &'static str,
    pub text: &'static str,
    pub schedule: Schedule,
}

/// The three configured broadcasts
pub fn jobs(config: &BroadcastConfig) -> [BroadcastJob; 3] {
    [
        BroadcastJob {
            name: "morning-affirmation",
            text: MORNING_AFFIRMATION,
            schedule: Schedule::DailyAt {
                hour: config.morning_hour,
            },
        },
        BroadcastJob {
            name: "evening-reflection",
            text: EVENING_REFLECTION,
            schedule: Schedule::DailyAt {
                hour: config.evening_hour,
            },
        },
        BroadcastJob {
            name: "focus-suggestion",
            text: FOCUS_SUGGESTION,
            schedule: Schedule::HourlyBetween {
                start: config.focus_start_hour,
                end: config.focus_end_hour,
            },
        },
    ]
}

impl BroadcastJob {
    /// Synthesize the fixed text and dispatch body plus media to the
    /// configured recipient, returning the provider message identifier
    ///
    /// # Errors
    ///
    /// Fails if either synthesis or dispatch fails; the runner logs the
    /// failed execution and waits for the next firing.
    pub async fn run(&self, context: &BroadcastContext) -> Result<String, BroadcastError> {
        let audio_path = context.synthesizer.synthesize(self.text).await?;
        let audio_url = media_url(&context.public_base_url, &audio_path);

        let mut message = OutboundMessage::text(context.recipient.clone(), self.text).with_media_url(audio_url);
        if let Some(ref callback) = context.status_callback {
            message = message.with_status_callback(callback.clone());
        }

        let sid = context.dispatcher.send(&message).await?;
        Ok(sid)
    }
}
