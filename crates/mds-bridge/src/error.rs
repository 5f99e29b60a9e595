//! Error types for the host bridge.

use mds_types::DecodeError;
use thiserror::Error;

/// Errors from feeding envelopes into a bridge.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// Input could not be read as an envelope.
    #[error("Envelope decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(String),
}
