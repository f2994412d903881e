use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the persona is blank, messaging credentials
    /// are incomplete, or broadcast hours are out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_persona()?;
        self.validate_messaging()?;
        self.validate_broadcast()?;
        Ok(())
    }

    /// The persona is the system instruction for every generated reply;
    /// a blank one would silently strip the assistant's voice
    fn validate_persona(&self) -> anyhow::Result<()> {
        if self.llm.persona.trim().is_empty() {
            anyhow::bail!("llm.persona must not be empty");
        }
        Ok(())
    }

    /// The webhook and broadcast paths both dispatch through the
    /// messaging provider, so its credentials are not optional
    fn validate_messaging(&self) -> anyhow::Result<()> {
        if self.messaging.account_sid.is_empty() {
            anyhow::bail!("messaging.account_sid is required");
        }

        match &self.messaging.auth_token {
            Some(token) if !token.expose_secret().is_empty() => {}
            _ => anyhow::bail!("messaging.auth_token is required"),
        }

        if self.messaging.from_number.is_empty() {
            anyhow::bail!("messaging.from_number is required");
        }

        Ok(())
    }

    fn validate_broadcast(&self) -> anyhow::Result<()> {
        let Some(ref broadcast) = self.broadcast else {
            return Ok(());
        };

        if broadcast.recipient.is_empty() {
            anyhow::bail!("broadcast.recipient must not be empty");
        }

        for (name, hour) in [
            ("morning_hour", broadcast.morning_hour),
            ("evening_hour", broadcast.evening_hour),
            ("focus_start_hour", broadcast.focus_start_hour),
            ("focus_end_hour", broadcast.focus_end_hour),
        ] {
            if !(0..=23).contains(&hour) {
                anyhow::bail!("broadcast.{name} must be between 0 and 23, got {hour}");
            }
        }

        if broadcast.focus_start_hour > broadcast.focus_end_hour {
            anyhow::bail!("broadcast.focus_start_hour must not be after broadcast.focus_end_hour");
        }

        Ok(())
    }
}
