//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `robohub.toml` in the working directory. Every field except
//! the vacuum list has a sensible default, so the file is only required
//! to name the devices. Environment variables take precedence over file
//! values.

use std::time::Duration;

use serde::Deserialize;

use robohub_adapter_robovac::RobovacConfig;
use robohub_domain::error::ValidationError;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Polling schedule.
    pub poll: PollConfig,
    /// Setup retry behaviour.
    pub setup: SetupConfig,
    /// Configured vacuums.
    #[serde(rename = "vacuum")]
    pub vacuums: Vec<RobovacConfig>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Polling scheduler configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between status polls.
    pub interval_secs: u64,
}

/// Setup retry configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Seconds to wait before retrying a not-ready device.
    pub retry_secs: u64,
}

impl Config {
    /// Load configuration from `robohub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// any value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("robohub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ROBOHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("ROBOHUB_POLL_INTERVAL") {
            if let Ok(secs) = val.parse() {
                self.poll.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("ROBOHUB_SETUP_RETRY") {
            if let Ok(secs) = val.parse() {
                self.setup.retry_secs = secs;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_secs == 0 {
            return Err(ValidationError::NotPositive {
                field: "poll.interval_secs",
            }
            .into());
        }
        if self.setup.retry_secs == 0 {
            return Err(ValidationError::NotPositive {
                field: "setup.retry_secs",
            }
            .into());
        }
        for vacuum in &self.vacuums {
            vacuum.validate()?;
        }
        Ok(())
    }

    /// Interval between status polls.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs)
    }

    /// Delay before retrying a not-ready device.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.setup.retry_secs)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "robohubd=info,robohub=info".to_string(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 20 }
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self { retry_secs: 30 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.poll.interval_secs, 20);
        assert_eq!(config.setup.retry_secs, 30);
        assert_eq!(config.logging.filter, "robohubd=info,robohub=info");
        assert!(config.vacuums.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.poll.interval_secs, 20);
        assert!(config.vacuums.is_empty());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = r#"
            [logging]
            filter = "debug"

            [poll]
            interval_secs = 60

            [setup]
            retry_secs = 10

            [[vacuum]]
            name = "Upstairs"
            ip_address = "192.168.0.123"
            username = "eufy_username"
            password = "eufy_password"

            [[vacuum]]
            ip_address = "192.168.0.124"
            username = "eufy_username"
            password = "eufy_password"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.poll.interval_secs, 60);
        assert_eq!(config.setup.retry_secs, 10);
        assert_eq!(config.vacuums.len(), 2);
        assert_eq!(config.vacuums[0].name, "Upstairs");
        assert_eq!(config.vacuums[1].name, "RoboVac");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.poll.interval_secs, 20);
    }

    #[test]
    fn should_reject_a_zero_poll_interval() {
        let mut config = Config::default();
        config.poll.interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn should_reject_a_zero_retry_delay() {
        let mut config = Config::default();
        config.setup.retry_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn should_reject_an_invalid_vacuum_entry() {
        let toml = r#"
            [[vacuum]]
            ip_address = ""
            username = "eufy_username"
            password = "eufy_password"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn should_convert_intervals_to_durations() {
        let config = Config::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(20));
        assert_eq!(config.retry_delay(), Duration::from_secs(30));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
