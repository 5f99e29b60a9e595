//! Telemetry configuration from environment variables.

use std::env;

use crate::TelemetryError;

const DEFAULT_SERVICE_NAME: &str = "minidapp-wallet";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name for startup logs
    pub service_name: String,

    /// Filter directive, e.g. `info` or `wallet_events=debug,info`
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// `WALLET_LOG_LEVEL` wins over `RUST_LOG` when both are set.
    pub fn from_env() -> Result<Self, TelemetryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TelemetryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let service_name = lookup("WALLET_SERVICE_NAME").unwrap_or(defaults.service_name);
        if service_name.trim().is_empty() {
            return Err(TelemetryError::Config(
                "WALLET_SERVICE_NAME must not be empty".to_string(),
            ));
        }

        Ok(Self {
            service_name,
            log_level: lookup("WALLET_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            console_output: flag(&lookup, "WALLET_CONSOLE_OUTPUT", defaults.console_output)?,
            json_logs: flag(&lookup, "WALLET_JSON_LOGS", defaults.json_logs)?,
        })
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool, TelemetryError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(v) => match v.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(TelemetryError::Config(format!("{key}: invalid flag {v:?}"))),
        },
    }
}
