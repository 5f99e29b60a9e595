//! # Wallet Telemetry
//!
//! Structured logging for the wallet processes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wallet_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env()?;
//! init_logging(&config)?;
//! tracing::info!("ready");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WALLET_SERVICE_NAME` | `minidapp-wallet` | Service name attached to startup logs |
//! | `WALLET_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `WALLET_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `WALLET_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}
