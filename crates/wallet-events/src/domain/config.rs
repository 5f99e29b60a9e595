//! Notifier configuration
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MDS_DEBUG` | `false` | Connect through a development endpoint |
//! | `MDS_DEBUG_HOST` | `127.0.0.1` | Development node host |
//! | `MDS_DEBUG_PORT` | `9003` | Development node MDS port |
//! | `MDS_DEBUG_MINIDAPPID` | built-in id | MiniDapp id on the development node |
//! | `MDS_ISOLATE_HANDLER_PANICS` | `true` | Catch panics raised by handlers |

use std::env;

use mds_bridge::DebugEndpoint;

use crate::error::NotifierError;

/// Configuration for `EventNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Set on the bridge before subscribing. `None` in production.
    pub debug_endpoint: Option<DebugEndpoint>,

    /// Catch handler panics so later envelopes are still delivered.
    pub isolate_handler_panics: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            debug_endpoint: None,
            isolate_handler_panics: true,
        }
    }
}

impl NotifierConfig {
    /// Development configuration with the default debug endpoint.
    #[must_use]
    pub fn development() -> Self {
        Self {
            debug_endpoint: Some(DebugEndpoint::default()),
            ..Self::default()
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = parse_flag(&lookup, "MDS_DEBUG")?.unwrap_or(false);
        let isolate_handler_panics =
            parse_flag(&lookup, "MDS_ISOLATE_HANDLER_PANICS")?.unwrap_or(true);

        if !debug {
            return Ok(Self {
                debug_endpoint: None,
                isolate_handler_panics,
            });
        }

        let mut endpoint = DebugEndpoint::default();
        if let Some(host) = lookup("MDS_DEBUG_HOST") {
            endpoint.host = host;
        }
        if let Some(port) = lookup("MDS_DEBUG_PORT") {
            endpoint.port = port
                .trim()
                .parse()
                .map_err(|_| NotifierError::InvalidPort(port.clone()))?;
        }
        if let Some(id) = lookup("MDS_DEBUG_MINIDAPPID") {
            if id.trim().is_empty() {
                return Err(NotifierError::MissingMiniDappId);
            }
            endpoint.minidapp_id = id;
        }

        Ok(Self {
            debug_endpoint: Some(endpoint),
            isolate_handler_panics,
        })
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<Option<bool>, NotifierError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(NotifierError::InvalidFlag {
            key: key.to_string(),
            value,
        }),
    }
}
