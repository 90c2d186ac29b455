use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::defaults;

/// Top-level configuration for the switchwatch console.
/// Deserializes from a TOML configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "defaults::default_backend_config")]
    pub backend: BackendConfig,

    #[serde(default = "defaults::default_polling_config")]
    pub polling: PollingConfig,

    #[serde(default = "defaults::default_thresholds_config")]
    pub thresholds: ThresholdsConfig,

    #[serde(default = "defaults::default_ai_config")]
    pub ai: AiConfig,

    #[serde(default = "defaults::default_console_config")]
    pub console: ConsoleConfig,

    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {}", path))
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.backend.base_url.parse::<http::Uri>().is_err() {
            bail!("backend.base_url is not a valid URI: {}", self.backend.base_url);
        }

        let cadences = [
            ("polling.stats_ms", self.polling.stats_ms),
            ("polling.history_ms", self.polling.history_ms),
            ("polling.alerts_ms", self.polling.alerts_ms),
            ("polling.blocked_ms", self.polling.blocked_ms),
            ("polling.status_ms", self.polling.status_ms),
            ("polling.ai_status_ms", self.polling.ai_status_ms),
            ("console.push_interval_ms", self.console.push_interval_ms),
        ];
        for (key, value) in cadences {
            if value == 0 {
                bail!("{} must be greater than zero", key);
            }
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: defaults::default_backend_config(),
            polling: defaults::default_polling_config(),
            thresholds: defaults::default_thresholds_config(),
            ai: defaults::default_ai_config(),
            console: defaults::default_console_config(),
            logging: defaults::default_logging_config(),
        }
    }
}

/// Detection backend the console polls.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "defaults::default_backend_base_url")]
    pub base_url: String,

    #[serde(default = "defaults::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Repeat cadence of each polling task, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "defaults::default_stats_ms")]
    pub stats_ms: u64,

    #[serde(default = "defaults::default_history_ms")]
    pub history_ms: u64,

    #[serde(default = "defaults::default_alerts_ms")]
    pub alerts_ms: u64,

    #[serde(default = "defaults::default_blocked_ms")]
    pub blocked_ms: u64,

    #[serde(default = "defaults::default_status_ms")]
    pub status_ms: u64,

    #[serde(default = "defaults::default_ai_status_ms")]
    pub ai_status_ms: u64,
}

/// Limits used for card alerts until the backend has reported its own.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "defaults::default_fallback_arp")]
    pub fallback_arp: u64,

    #[serde(default = "defaults::default_fallback_mac")]
    pub fallback_mac: u64,
}

/// AI classifier presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Prediction label that puts the AI box into its alert state.
    #[serde(default = "defaults::default_flood_label")]
    pub flood_label: String,
}

/// Operator console (HTTP + WebSocket) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "defaults::default_console_bind")]
    pub bind: String,

    #[serde(default = "defaults::default_push_interval_ms")]
    pub push_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    pub level: String,

    #[serde(default = "defaults::default_log_file")]
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(settings.polling.stats_ms, 1000);
        assert_eq!(settings.polling.alerts_ms, 2000);
        assert_eq!(settings.polling.blocked_ms, 3000);
        assert_eq!(settings.thresholds.fallback_arp, 10);
        assert_eq!(settings.thresholds.fallback_mac, 10);
        assert_eq!(settings.ai.flood_label, "ARP_FLOOD");
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let settings = Settings::from_toml(
            r#"
            [polling]
            blocked_ms = 5000

            [backend]
            base_url = "http://10.0.0.2:5000"
            "#,
        )
        .unwrap();
        assert_eq!(settings.polling.blocked_ms, 5000);
        assert_eq!(settings.polling.stats_ms, 1000);
        assert_eq!(settings.backend.base_url, "http://10.0.0.2:5000");
        assert_eq!(settings.backend.request_timeout_ms, 5000);
    }

    #[test]
    fn test_zero_cadence_rejected() {
        let err = Settings::from_toml("[polling]\nstats_ms = 0\n").unwrap_err();
        assert!(format!("{:#}", err).contains("polling.stats_ms"));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        assert!(Settings::from_toml("[backend]\nbase_url = \"not a uri\"\n").is_err());
    }
}
