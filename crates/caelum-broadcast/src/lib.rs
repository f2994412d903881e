//! Scheduled broadcast jobs for the Caelum gateway
//!
//! Three timer-triggered messages — a morning affirmation, an evening
//! reflection, and an hourly focus suggestion — each synthesized to
//! audio and dispatched to one configured recipient.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod jobs;
mod runner;
mod schedule;

pub use jobs::{BroadcastContext, BroadcastError, BroadcastJob, jobs};
pub use runner::start_broadcasts;
pub use schedule::Schedule;
