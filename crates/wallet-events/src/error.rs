//! Error types for the event notifier.

use thiserror::Error;

/// Errors raised while building notifier configuration.
///
/// Registration and dispatch never fail; they report through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifierError {
    #[error("Invalid debug port: {0}")]
    InvalidPort(String),

    #[error("Debug mode requires a MiniDapp id")]
    MissingMiniDappId,

    #[error("Invalid boolean for {key}: {value}")]
    InvalidFlag { key: String, value: String },
}
