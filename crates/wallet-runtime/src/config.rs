//! Runtime configuration.
//!
//! Combines the notifier and telemetry sections, each read from its own
//! environment variables.

use std::env;

use thiserror::Error;
use wallet_events::{NotifierConfig, NotifierError};
use wallet_telemetry::{TelemetryConfig, TelemetryError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("notifier configuration: {0}")]
    Notifier(#[from] NotifierError),

    #[error("telemetry configuration: {0}")]
    Telemetry(#[from] TelemetryError),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub notifier: NotifierConfig,
    pub telemetry: TelemetryConfig,
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            notifier: NotifierConfig::from_lookup(&lookup)?,
            telemetry: TelemetryConfig::from_lookup(&lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = RuntimeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_sections_read_together() {
        let config = RuntimeConfig::from_lookup(|key| match key {
            "MDS_DEBUG" => Some("true".to_string()),
            "WALLET_JSON_LOGS" => Some("true".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(config.notifier.debug_endpoint.is_some());
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_section_errors_are_wrapped() {
        let err = RuntimeConfig::from_lookup(|key| match key {
            "MDS_DEBUG" => Some("1".to_string()),
            "MDS_DEBUG_PORT" => Some("port".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Notifier(NotifierError::InvalidPort(_))));

        let err = RuntimeConfig::from_lookup(|key| match key {
            "WALLET_CONSOLE_OUTPUT" => Some("loud".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Telemetry(_)));
    }
}
