use serde::Deserialize;

/// Scheduled broadcast configuration
///
/// When this section is present the server starts the three broadcast
/// tasks: a morning affirmation, an evening reflection, and an hourly
/// focus suggestion inside a daytime window.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BroadcastConfig {
    /// Recipient phone number for every broadcast
    pub recipient: String,
    /// Hour of day (0-23) the morning affirmation fires
    #[serde(default = "default_morning_hour")]
    pub morning_hour: i8,
    /// Hour of day (0-23) the evening reflection fires
    #[serde(default = "default_evening_hour")]
    pub evening_hour: i8,
    /// First hour of the focus suggestion window
    #[serde(default = "default_focus_start_hour")]
    pub focus_start_hour: i8,
    /// Last hour of the focus suggestion window (inclusive)
    #[serde(default = "default_focus_end_hour")]
    pub focus_end_hour: i8,
}

#[allow(clippy::missing_const_for_fn)]
fn default_morning_hour() -> i8 {
    7
}

#[allow(clippy::missing_const_for_fn)]
fn default_evening_hour() -> i8 {
    21
}

#[allow(clippy::missing_const_for_fn)]
fn default_focus_start_hour() -> i8 {
    10
}

#[allow(clippy::missing_const_for_fn)]
fn default_focus_end_hour() -> i8 {
    16
}
